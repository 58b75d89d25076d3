//! Dashboard analytics simulation.
//!
//! Walks the full data path the dashboard exercises: drain a paged stats
//! collection, combine exchange rates, aggregate per-market rows, and track
//! next-price order lifecycles across advancing oracle rounds.

use perps_analytics::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn main() {
    println!("Perps Dashboard Analytics Simulation");
    println!("Paged Stats, Rate Table, Market Rows, Order Lifecycle\n");

    scenario_1_paged_stats();
    scenario_2_rate_table();
    scenario_3_market_rows();
    scenario_4_order_lifecycle();

    println!("\nAll simulations completed successfully.");
}

/// Drain a paged remote collection into one leaderboard.
fn scenario_1_paged_stats() {
    println!("Scenario 1: Paged Trader Stats\n");

    let rows: Vec<FuturesStat> = (0..1_100u64)
        .map(|i| FuturesStat {
            account: format!("0x{:040x}", i),
            pnl_with_fees_paid: Decimal::from(i % 700) - dec!(250),
            liquidations: (i % 5) as u32,
            total_trades: (i % 90) as u32 + 1,
            total_volume: Decimal::from(i) * dec!(1000),
        })
        .collect();

    let mut backend = StatsBackend::new(rows);
    let stats = fetch_all(|skip| backend.page(skip)).unwrap();

    println!("  {} accounts drained in {} requests", stats.len(), backend.requests());
    println!("  Total volume: ${}", total_volume(&stats));

    let ranked = rank_by_pnl(&stats);
    println!("  Top account: {} with PnL ${}\n", ranked[0].account, ranked[0].pnl_with_fees_paid);
}

/// Combine the synth rate arrays with the auxiliary currency query.
fn scenario_2_rate_table() {
    println!("Scenario 2: Exchange Rate Table\n");

    const WEI: u128 = 1_000_000_000_000_000_000;

    let synth_keys = encode_currencies(&["sETH", "sBTC", "sLINK"]).unwrap();
    let synth_rates = [
        RawRate(2_000 * WEI),
        RawRate(30_000 * WEI),
        RawRate(7 * WEI),
    ];

    let aux_keys = encode_currencies(&ADDITIONAL_CURRENCIES).unwrap();
    let aux_rates = [
        RawRate(3 * WEI),
        RawRate(1_900 * WEI),
        RawRate(24 * WEI),
        RawRate(2 * WEI),
        RawRate(5 * WEI),
    ];

    let rates = combine_rates(&synth_keys, &synth_rates, &aux_keys, &aux_rates).unwrap();

    println!("  {} input rates expanded to {} table entries", 8, rates.len());
    println!("  sETH: ${}, ETH: ${} (one rate, two keys)", rates["sETH"], rates["ETH"]);
    println!("  SNX: ${} (auxiliary, single key)\n", rates["SNX"]);
}

/// Join market snapshots with their sibling series into dashboard rows.
fn scenario_3_market_rows() {
    println!("Scenario 3: Market Metrics Rows\n");

    let markets = [
        MarketSnapshot::new("sETH", dec!(2000), dec!(10), dec!(4)),
        MarketSnapshot::new("sBTC", dec!(30000), dec!(2), dec!(-1)),
        MarketSnapshot::new("sTRX", dec!(0.06), dec!(0), dec!(0)).suspended("market-closure"),
    ];

    // sBTC's daily price has not resolved: its change renders as a placeholder
    let daily_prices = [
        DailyPricePoint::new("sETH", dec!(1900)),
        DailyPricePoint::new("sTRX", dec!(0.06)),
    ];

    let funding_samples = period_to_hourly_samples(
        [("sETH", Some(dec!(0.024))), ("sBTC", Some(dec!(-0.012))), ("sTRX", None)],
        dec!(24),
    );

    let mut volumes = VolumeMap::new();
    volumes.insert(AssetKey::from_symbol("sETH").unwrap(), dec!(1_500_000));
    volumes.insert(AssetKey::from_symbol("sBTC").unwrap(), dec!(4_200_000));

    let rows = aggregate_markets(&markets, &daily_prices, &funding_samples, &volumes).unwrap();

    for row in &rows {
        println!(
            "  {}: price ${}, volume ${}, change {}, funding {}, OI {}",
            row.market_name,
            row.price,
            row.volume,
            display_opt(row.price_change),
            display_opt(row.funding_rate),
            display_opt(row.open_interest),
        );
    }

    let eth = &rows[0];
    println!(
        "\n  ETH-PERP interest split: ${} long + ${} short = ${} open\n",
        eth.long_interest.unwrap(),
        eth.short_interest.unwrap(),
        eth.open_interest.unwrap()
    );
}

/// Track next-price orders while the oracle round advances.
fn scenario_4_order_lifecycle() {
    println!("Scenario 4: Next-Price Order Lifecycle\n");

    let orders = [
        PendingOrder::next_price("sETH", SignedSize::new(dec!(2)), RoundId(100), Timestamp(1_000)),
        PendingOrder::next_price("sBTC", SignedSize::new(dec!(-1)), RoundId(102), Timestamp(2_000)),
    ];

    for round in [99u64, 100, 101, 102, 104] {
        let rows = open_order_rows(&orders, Some(RoundId(round)));
        let states: Vec<String> = rows
            .iter()
            .map(|row| format!("{} {:?}", row.market_name, row.status))
            .collect();
        println!("  round {}: {}", round, states.join(", "));
    }

    let rows = open_order_rows(&orders, None);
    println!("  round unresolved: everything {:?}", rows[0].status);
}

fn display_opt(value: Option<Decimal>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}
