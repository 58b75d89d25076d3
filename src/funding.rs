// 5.0: funding rate normalization. markets report funding per settlement
// period; the dashboard compares markets on an hourly basis, so raw
// per-period estimates are rescaled before they reach the aggregator as
// FundingSamples. a market without enough history stays None end to end.

use crate::market::FundingSample;
use rust_decimal::Decimal;

pub const HOURS_PER_YEAR: u32 = 8_760;

// 5.1: rescale a per-period rate to one hour. None for a degenerate period.
pub fn hourly_rate(period_rate: Decimal, period_hours: Decimal) -> Option<Decimal> {
    if period_hours <= Decimal::ZERO {
        return None;
    }
    Some(period_rate / period_hours)
}

// 5.2: hourly rate -> APR equivalent
pub fn annualize_hourly(hourly: Decimal) -> Decimal {
    hourly * Decimal::from(HOURS_PER_YEAR)
}

pub fn period_to_hourly_samples<'a, I>(period_rates: I, period_hours: Decimal) -> Vec<FundingSample>
where
    I: IntoIterator<Item = (&'a str, Option<Decimal>)>,
{
    period_rates
        .into_iter()
        .map(|(asset, rate)| {
            let hourly = rate.and_then(|r| hourly_rate(r, period_hours));
            FundingSample::new(asset, hourly)
        })
        .collect()
}
