// 8.0 config.rs: query settings in one place. page size, auxiliary currencies,
// sample periods. these mirror what the remote endpoints are provisioned for.

use serde::{Deserialize, Serialize};

// Page size for paged remote collections. The subgraph caps a single request
// at this many rows, so the paginator treats a full page as "more may exist".
pub const PAGE_SIZE: usize = 500;

// Commonly used currencies to fetch besides the synth rate set. These are not
// synths, so each expands to exactly one rate table entry.
pub const ADDITIONAL_CURRENCIES: [&str; 5] = ["SNX", "XAU", "XAG", "DYDX", "APE"];

pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;

// 8.1: settings for the periodic dashboard queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    // Rows per paged request
    pub page_size: usize,
    // Extra currencies appended to the synth rate query
    pub additional_currencies: Vec<String>,
    // Funding rate sample window in seconds
    pub funding_period_secs: u64,
    // Lag for the daily price comparison in seconds
    pub daily_price_lag_secs: u64,
    // How often callers refetch rates, in milliseconds
    pub rates_refetch_interval_ms: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            additional_currencies: ADDITIONAL_CURRENCIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            funding_period_secs: SECONDS_PER_HOUR,
            daily_price_lag_secs: SECONDS_PER_DAY,
            rates_refetch_interval_ms: 60_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_config() {
        let config = QueryConfig::default();
        assert_eq!(config.page_size, 500);
        assert_eq!(config.funding_period_secs, 3_600);
        assert_eq!(config.additional_currencies.len(), 5);
        assert!(config.additional_currencies.contains(&"SNX".to_string()));
    }
}
