//! Per-market input snapshots.
//!
//! These are the immutable values the data-fetching layer hands the
//! aggregator: the on-chain market list plus the three independently-arriving
//! series (lagged daily price, funding sample, trading volume). None of them
//! is mutated here; the aggregator only reads them.

use crate::types::AssetKey;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Spot state of one futures market as read from chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Synth symbol the market trades (e.g. "sETH")
    pub asset: String,
    /// Current oracle price in quote units
    pub price: Decimal,
    /// Absolute open interest in base units, >= 0
    pub market_size: Decimal,
    /// Long-minus-short imbalance, within [-market_size, market_size]
    pub market_skew: Decimal,
    pub is_suspended: bool,
    /// Upstream closure reason when suspended (registry-owned strings)
    pub closure_reason: Option<String>,
}

impl MarketSnapshot {
    pub fn new(asset: &str, price: Decimal, market_size: Decimal, market_skew: Decimal) -> Self {
        Self {
            asset: asset.to_string(),
            price,
            market_size,
            market_skew,
            is_suspended: false,
            closure_reason: None,
        }
    }

    pub fn suspended(mut self, reason: &str) -> Self {
        self.is_suspended = true;
        self.closure_reason = Some(reason.to_string());
        self
    }
}

/// Price for an asset as of ~24h prior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPricePoint {
    pub asset: String,
    pub price_at: Decimal,
}

impl DailyPricePoint {
    pub fn new(asset: &str, price_at: Decimal) -> Self {
        Self {
            asset: asset.to_string(),
            price_at,
        }
    }
}

/// Hour-normalized funding rate estimate for one market.
/// None when there is not enough history to estimate one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingSample {
    pub asset: String,
    pub funding_rate: Option<Decimal>,
}

impl FundingSample {
    pub fn new(asset: &str, funding_rate: Option<Decimal>) -> Self {
        Self {
            asset: asset.to_string(),
            funding_rate,
        }
    }
}

/// Trading volume per market, keyed by the asset's on-chain binary identifier
/// rather than its string symbol. Joining against the market list requires the
/// explicit AssetKey translation.
pub type VolumeMap = HashMap<AssetKey, Decimal>;
