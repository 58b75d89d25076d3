// perps-analytics: market analytics and order lifecycle core for a perpetual
// futures dashboard. merges independently-fetched data sources into consistent
// per-market view models, drains paged remote collections, and classifies
// pending next-price orders against the oracle round counter.
// all computation is deterministic with no external I/O: the async fetching of
// inputs belongs to the transport layer, this crate only combines results.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: AssetKey, RawRate, RoundId, SignedSize, Timestamp
//   2.x  currency.rs: synth naming conventions, display names
//   3.x  paginator.rs: cursor pagination over paged remote collections
//   4.x  rates.rs: exchange rate combining, 18-decimal unit normalization
//   5.x  funding.rs: funding rate normalization to hourly samples
//   6.x  aggregator.rs: per-market metrics join
//   7.x  orders.rs: next-price order lifecycle evaluation
//   8.x  config.rs: query constants
//   9.x  stats.rs: paginated trader stats + simulated backend
// market.rs holds the input snapshot types shared by 5.x and 6.x

// data acquisition utilities
pub mod config;
pub mod paginator;
pub mod rates;
pub mod stats;

// analytics core
pub mod aggregator;
pub mod currency;
pub mod funding;
pub mod market;
pub mod orders;
pub mod types;

// re exports for convenience
pub use aggregator::*;
pub use config::{QueryConfig, ADDITIONAL_CURRENCIES, PAGE_SIZE};
pub use currency::*;
pub use funding::*;
pub use market::*;
pub use orders::*;
pub use paginator::*;
pub use rates::*;
pub use stats::*;
pub use types::*;
