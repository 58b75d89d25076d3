//! End-to-end tests over the full dashboard data path: paged stats, rate
//! combining, market row aggregation, and order lifecycle, wired together the
//! way the presentation layer consumes them.

use perps_analytics::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const WEI: u128 = 1_000_000_000_000_000_000;

fn stat(i: u64) -> FuturesStat {
    FuturesStat {
        account: format!("0x{:040x}", i),
        pnl_with_fees_paid: Decimal::from(i) - dec!(100),
        liquidations: (i % 3) as u32,
        total_trades: (i % 40) as u32 + 1,
        total_volume: Decimal::from(i * 10),
    }
}

#[test]
fn stats_drain_rate_table_and_rows_agree() {
    // 1. drain the paged stats collection
    let rows: Vec<FuturesStat> = (0..1_000).map(stat).collect();
    let mut backend = StatsBackend::new(rows);
    let stats = fetch_all(|skip| backend.page(skip)).unwrap();

    assert_eq!(stats.len(), 1_000);
    // exact multiple of the page size: two full pages plus the trailing probe
    assert_eq!(backend.requests(), 3);

    // 2. combine the rate arrays
    let synth_keys = encode_currencies(&["sETH", "sBTC"]).unwrap();
    let aux_keys = encode_currencies(&["SNX"]).unwrap();
    let rates = combine_rates(
        &synth_keys,
        &[RawRate(2_000 * WEI), RawRate(30_000 * WEI)],
        &aux_keys,
        &[RawRate(3 * WEI)],
    )
    .unwrap();

    assert_eq!(rates.len(), 5);
    assert_eq!(rates["ETH"], dec!(2000));

    // 3. aggregate market rows, priced consistently with the rate table
    let markets = [
        MarketSnapshot::new("sETH", rates["sETH"], dec!(10), dec!(4)),
        MarketSnapshot::new("sBTC", rates["sBTC"], dec!(2), dec!(-1)),
    ];
    let daily_prices = [DailyPricePoint::new("sETH", dec!(1900))];
    let funding_samples =
        period_to_hourly_samples([("sETH", Some(dec!(0.024))), ("sBTC", None)], dec!(24));
    let mut volumes = VolumeMap::new();
    volumes.insert(AssetKey::from_symbol("sETH").unwrap(), dec!(1_500_000));

    let market_rows =
        aggregate_markets(&markets, &daily_prices, &funding_samples, &volumes).unwrap();

    let eth = &market_rows[0];
    assert_eq!(eth.market_name, "ETH-PERP");
    assert_eq!(eth.open_interest, Some(dec!(20000)));
    assert_eq!(eth.long_interest, Some(dec!(14000)));
    assert_eq!(eth.short_interest, Some(dec!(6000)));
    assert_eq!(eth.price_change, Some(dec!(0.05)));
    assert_eq!(eth.funding_rate, Some(dec!(0.001)));
    assert_eq!(eth.volume, dec!(1500000));

    let btc = &market_rows[1];
    assert_eq!(btc.past_price, None);
    assert_eq!(btc.price_change, None);
    assert_eq!(btc.funding_rate, None);
    assert_eq!(btc.volume, Decimal::ZERO);
}

#[test]
fn sections_fail_independently() {
    // the stats endpoint being down must not poison the market rows built
    // from inputs that did resolve
    let mut backend = StatsBackend::new((0..10).map(stat).collect());
    backend.set_available(false);
    let stats = fetch_all(|skip| backend.page(skip));
    assert_eq!(stats, Err(StatsError::Unavailable));

    let markets = [MarketSnapshot::new("sETH", dec!(2000), dec!(10), dec!(4))];
    let rows = aggregate_markets(&markets, &[], &[], &VolumeMap::new()).unwrap();
    assert_eq!(rows[0].open_interest, Some(dec!(20000)));
}

#[test]
fn caller_supplied_empty_defaults_then_refresh() {
    // "render with whatever is ready": empty defaults first, then re-invoke
    // once the lagged series resolves
    let markets = [MarketSnapshot::new("sETH", dec!(2000), dec!(10), dec!(4))];

    let first = aggregate_markets(&markets, &[], &[], &VolumeMap::new()).unwrap();
    assert_eq!(first[0].price_change, None);

    let daily = [DailyPricePoint::new("sETH", dec!(1800))];
    let second = aggregate_markets(&markets, &daily, &[], &VolumeMap::new()).unwrap();
    assert_eq!(second[0].price_change, Some(dec!(0.1)));
}

#[test]
fn order_lifecycle_tracks_round_progression() {
    let orders = [
        PendingOrder::next_price("sETH", SignedSize::new(dec!(2)), RoundId(100), Timestamp(1_000)),
        PendingOrder::next_price("sBTC", SignedSize::new(dec!(-3)), RoundId(101), Timestamp(2_000)),
    ];

    // round still unresolved: everything pending
    let rows = open_order_rows(&orders, None);
    assert!(rows.iter().all(|r| r.status == OrderStatus::Pending));

    // round 101: sETH in its second executable round, sBTC in its first
    let rows = open_order_rows(&orders, Some(RoundId(101)));
    assert!(rows[0].is_executable);
    assert!(rows[1].is_executable);

    // round 102: sETH's window closed, sBTC still executable
    let rows = open_order_rows(&orders, Some(RoundId(102)));
    assert!(rows[0].is_stale);
    assert_eq!(rows[0].side, Some(Side::Long));
    assert_eq!(rows[0].size, dec!(2));
    assert!(rows[1].is_executable);

    // round 103: both stale
    let rows = open_order_rows(&orders, Some(RoundId(103)));
    assert!(rows.iter().all(|r| r.is_stale));
}

#[test]
fn view_models_serialize() {
    let markets = [MarketSnapshot::new("sETH", dec!(2000), dec!(10), dec!(4))];
    let rows = aggregate_markets(&markets, &[], &[], &VolumeMap::new()).unwrap();

    let json = serde_json::to_string(&rows).unwrap();
    let back: Vec<MarketRow> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rows);

    let order =
        PendingOrder::next_price("sETH", SignedSize::new(dec!(-1)), RoundId(7), Timestamp(9));
    let json = serde_json::to_string(&order).unwrap();
    let back: PendingOrder = serde_json::from_str(&json).unwrap();
    assert_eq!(back, order);
}
