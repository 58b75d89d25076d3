// 6.0: market metrics aggregation. joins the market list with three
// independently-fetched series (lagged daily price, funding sample, volume)
// into one derived row per market, in input order.
//
// missing-data policy, kept asymmetric on purpose:
//   price change / funding / interest: unknown is None, never zero. consumers
//     branch on it to render a placeholder instead of a numeric 0.
//   volume: unknown is zero. no recorded trades IS zero volume.
//
// the joins are by string symbol except volume, which arrives keyed by the
// asset's on-chain binary identifier and goes through the AssetKey codec.

use crate::currency::market_name;
use crate::market::{DailyPricePoint, FundingSample, MarketSnapshot, VolumeMap};
use crate::types::{AssetKey, KeyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One derived dashboard row per market. Never persisted, recomputed from
/// inputs on every aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketRow {
    pub asset: String,
    /// Display name, e.g. "ETH-PERP"
    pub market_name: String,
    pub price: Decimal,
    /// Quote-denominated trading volume; zero when no entry exists
    pub volume: Decimal,
    /// Price ~24h ago; None when the lagged series has no entry
    pub past_price: Option<Decimal>,
    /// (price - past_price) / price; None without a past price or at zero price
    pub price_change: Option<Decimal>,
    /// Hour-normalized funding rate; None when unavailable
    pub funding_rate: Option<Decimal>,
    /// market_size * price; None at zero price
    pub open_interest: Option<Decimal>,
    /// Open interest in base units (market_size), always known
    pub open_interest_native: Decimal,
    /// |market_size + market_skew| / 2 * price; None at zero price
    pub long_interest: Option<Decimal>,
    /// |market_size - market_skew| / 2 * price; None at zero price
    pub short_interest: Option<Decimal>,
    pub market_skew: Decimal,
    pub is_suspended: bool,
    pub closure_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    #[error("market snapshot at index {index} is missing its asset symbol")]
    MissingAssetSymbol { index: usize },

    #[error("asset {asset} has no valid market key: {source}")]
    BadAssetKey { asset: String, source: KeyError },
}

/// Join the market list with its three sibling series into dashboard rows.
///
/// Pure and total over optional data: absent daily prices, funding samples,
/// and volume entries all produce well-defined row values. Only a malformed
/// required field (no asset symbol, unencodable key) errors, and then the
/// whole aggregation fails rather than emitting a partial row set.
///
/// Output order matches input market order. Any presentation ordering, e.g.
/// by volume, belongs to the consumer.
pub fn aggregate_markets(
    markets: &[MarketSnapshot],
    daily_prices: &[DailyPricePoint],
    funding_samples: &[FundingSample],
    volumes: &VolumeMap,
) -> Result<Vec<MarketRow>, AggregateError> {
    markets
        .iter()
        .enumerate()
        .map(|(index, market)| {
            aggregate_one(index, market, daily_prices, funding_samples, volumes)
        })
        .collect()
}

fn aggregate_one(
    index: usize,
    market: &MarketSnapshot,
    daily_prices: &[DailyPricePoint],
    funding_samples: &[FundingSample],
    volumes: &VolumeMap,
) -> Result<MarketRow, AggregateError> {
    if market.asset.is_empty() {
        return Err(AggregateError::MissingAssetSymbol { index });
    }
    let key = AssetKey::from_symbol(&market.asset).map_err(|source| {
        AggregateError::BadAssetKey {
            asset: market.asset.clone(),
            source,
        }
    })?;

    // volume joins through the binary key; no entry means no recorded trades
    let volume = volumes.get(&key).copied().unwrap_or(Decimal::ZERO);

    // first match wins, as the lagged series is one row per asset
    let past_price = daily_prices
        .iter()
        .find(|point| point.asset == market.asset)
        .map(|point| point.price_at);

    let price_change = match past_price {
        Some(past) if !market.price.is_zero() => Some((market.price - past) / market.price),
        _ => None,
    };

    let funding_rate = funding_samples
        .iter()
        .find(|sample| sample.asset == market.asset)
        .and_then(|sample| sample.funding_rate);

    // interest figures are undefined without a price, not zero
    let (open_interest, long_interest, short_interest) = if market.price.is_zero() {
        (None, None, None)
    } else {
        (
            Some(market.market_size * market.price),
            Some(((market.market_size + market.market_skew) / dec!(2)).abs() * market.price),
            Some(((market.market_size - market.market_skew) / dec!(2)).abs() * market.price),
        )
    };

    Ok(MarketRow {
        asset: market.asset.clone(),
        market_name: market_name(&market.asset),
        price: market.price,
        volume,
        past_price,
        price_change,
        funding_rate,
        open_interest,
        open_interest_native: market.market_size,
        long_interest,
        short_interest,
        market_skew: market.market_skew,
        is_suspended: market.is_suspended,
        closure_reason: market.closure_reason.clone(),
    })
}
