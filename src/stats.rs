// 9.0: trader stats. the stats endpoint serves one lifetime record per
// account, in pages; the cursor paginator drains them into a single
// collection for leaderboard views. StatsBackend simulates that endpoint for
// tests and the sim, including its failure mode.

use crate::config::PAGE_SIZE;
use crate::paginator::Page;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifetime trading record for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuturesStat {
    pub account: String,
    pub pnl_with_fees_paid: Decimal,
    pub liquidations: u32,
    pub total_trades: u32,
    pub total_volume: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("stats endpoint unavailable")]
    Unavailable,
}

/// Sum of quote-denominated volume across all accounts.
pub fn total_volume(stats: &[FuturesStat]) -> Decimal {
    stats.iter().map(|s| s.total_volume).sum()
}

/// Leaderboard order: descending PnL, ties kept in input order.
pub fn rank_by_pnl(stats: &[FuturesStat]) -> Vec<FuturesStat> {
    let mut ranked = stats.to_vec();
    ranked.sort_by(|a, b| b.pnl_with_fees_paid.cmp(&a.pnl_with_fees_paid));
    ranked
}

/// In-memory stand-in for the paged stats endpoint.
#[derive(Debug, Clone)]
pub struct StatsBackend {
    rows: Vec<FuturesStat>,
    page_size: usize,
    available: bool,
    requests: usize,
}

impl StatsBackend {
    pub fn new(rows: Vec<FuturesStat>) -> Self {
        Self::with_page_size(rows, PAGE_SIZE)
    }

    pub fn with_page_size(rows: Vec<FuturesStat>, page_size: usize) -> Self {
        Self {
            rows,
            page_size,
            available: true,
            requests: 0,
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Serve one page at the given skip, like the remote endpoint would.
    pub fn page(&mut self, skip: usize) -> Result<Page<FuturesStat>, StatsError> {
        self.requests += 1;
        if !self.available {
            return Err(StatsError::Unavailable);
        }
        let end = self.rows.len().min(skip.saturating_add(self.page_size));
        let items = if skip >= end {
            Vec::new()
        } else {
            self.rows[skip..end].to_vec()
        };
        Ok(Page::new(items, skip))
    }

    pub fn requests(&self) -> usize {
        self.requests
    }
}
