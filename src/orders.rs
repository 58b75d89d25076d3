// 7.0: next-price order lifecycle. a next-price order commits to fill at a
// future oracle round's price, so its state is purely a function of where the
// current round sits relative to the order's target round:
//
//   current <  target      pending, the target round has not arrived
//   current in {target, target+1}   executable now
//   current >= target + 2  stale, the execution window has passed
//
// the guards run in that priority order with Stale first; the ranges are
// mutually exclusive but the window boundaries must not double-fire. state is
// recomputed fresh on every evaluation since the round advances on its own,
// independent of any order mutation.

use crate::currency::market_name;
use crate::types::{RoundId, Side, SignedSize, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order kinds that can sit in the pending queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    /// Deferred until a future oracle round's price is known
    NextPrice,
    Limit,
    Market,
}

impl OrderType {
    /// Label used in the open-orders view.
    pub fn display(&self) -> &'static str {
        match self {
            OrderType::NextPrice => "Next-Price",
            OrderType::Limit => "Limit",
            OrderType::Market => "Market",
        }
    }
}

/// An order awaiting execution, as read from chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub asset: String,
    /// Signed: positive = long, negative = short
    pub size: SignedSize,
    pub order_type: OrderType,
    /// Oracle round whose price the order fills at
    pub target_round_id: RoundId,
    pub timestamp: Timestamp,
}

impl PendingOrder {
    pub fn next_price(
        asset: &str,
        size: SignedSize,
        target_round_id: RoundId,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            asset: asset.to_string(),
            size,
            order_type: OrderType::NextPrice,
            target_round_id,
            timestamp,
        }
    }
}

/// Discrete lifecycle state. Computed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Target round not yet reached
    Pending,
    /// May be executed this round or the next
    Executable,
    /// Two confirmed rounds have elapsed past the target without execution
    Stale,
}

/// Classify an order's execution window against the current oracle round.
pub fn order_status(target: RoundId, current: RoundId) -> OrderStatus {
    // checked distance, not target + 2: a target near the counter edge must
    // not read as already-stale
    let elapsed = current.value().checked_sub(target.value());
    if elapsed.map_or(false, |rounds| rounds >= 2) {
        OrderStatus::Stale
    } else if current == target || current == target.offset(1) {
        OrderStatus::Executable
    } else {
        OrderStatus::Pending
    }
}

/// One row of the open-orders view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOrderRow {
    pub asset: String,
    /// Display name, e.g. "ETH-PERP"
    pub market_name: String,
    pub order_type: String,
    /// None for a zero-size order, which has no direction
    pub side: Option<Side>,
    /// Absolute size; direction lives in `side`
    pub size: Decimal,
    pub status: OrderStatus,
    pub is_executable: bool,
    pub is_stale: bool,
    pub timestamp: Timestamp,
}

/// Build display rows for the open-orders table.
///
/// `current_round` is None until the round query resolves; the view then
/// evaluates against round 0, which leaves every real order Pending rather
/// than guessing at executability.
pub fn open_order_rows(orders: &[PendingOrder], current_round: Option<RoundId>) -> Vec<OpenOrderRow> {
    let current = current_round.unwrap_or(RoundId(0));
    orders
        .iter()
        .map(|order| {
            let status = order_status(order.target_round_id, current);
            OpenOrderRow {
                asset: order.asset.clone(),
                market_name: market_name(&order.asset),
                order_type: order.order_type.display().to_string(),
                side: order.size.side(),
                size: order.size.abs(),
                status,
                is_executable: status == OrderStatus::Executable,
                is_stale: status == OrderStatus::Stale,
                timestamp: order.timestamp,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn window_boundaries_exact() {
        let target = RoundId(100);

        assert_eq!(order_status(target, RoundId(99)), OrderStatus::Pending);
        assert_eq!(order_status(target, RoundId(100)), OrderStatus::Executable);
        assert_eq!(order_status(target, RoundId(101)), OrderStatus::Executable);
        assert_eq!(order_status(target, RoundId(102)), OrderStatus::Stale);
        assert_eq!(order_status(target, RoundId(500)), OrderStatus::Stale);
    }

    #[test]
    fn far_future_target_pending() {
        assert_eq!(order_status(RoundId(1000), RoundId(0)), OrderStatus::Pending);
        assert_eq!(order_status(RoundId(1000), RoundId(998)), OrderStatus::Pending);
    }

    #[test]
    fn status_at_round_zero() {
        // target round 0 is immediately inside its own window
        assert_eq!(order_status(RoundId(0), RoundId(0)), OrderStatus::Executable);
        assert_eq!(order_status(RoundId(0), RoundId(1)), OrderStatus::Executable);
        assert_eq!(order_status(RoundId(0), RoundId(2)), OrderStatus::Stale);
    }

    #[test]
    fn no_false_stale_at_round_edge() {
        // a target at the counter edge can never go stale
        let target = RoundId(u64::MAX);
        assert_eq!(order_status(target, RoundId(u64::MAX)), OrderStatus::Executable);

        let near = RoundId(u64::MAX - 1);
        assert_eq!(order_status(near, RoundId(u64::MAX)), OrderStatus::Executable);
    }

    #[test]
    fn rows_reflect_round_window() {
        let orders = [
            PendingOrder::next_price("sETH", SignedSize::new(dec!(2)), RoundId(100), Timestamp(1)),
            PendingOrder::next_price("sBTC", SignedSize::new(dec!(-1)), RoundId(103), Timestamp(2)),
        ];

        let rows = open_order_rows(&orders, Some(RoundId(102)));

        // sETH target 100, current 102: window passed
        assert!(rows[0].is_stale);
        assert!(!rows[0].is_executable);
        assert_eq!(rows[0].status, OrderStatus::Stale);
        assert_eq!(rows[0].market_name, "ETH-PERP");
        assert_eq!(rows[0].order_type, "Next-Price");

        // sBTC target 103, current 102: not yet
        assert_eq!(rows[1].status, OrderStatus::Pending);
        assert_eq!(rows[1].side, Some(Side::Short));
        assert_eq!(rows[1].size, dec!(1));
    }

    #[test]
    fn missing_round_id_defaults_to_zero() {
        let orders = [PendingOrder::next_price(
            "sETH",
            SignedSize::new(dec!(2)),
            RoundId(100),
            Timestamp(1),
        )];

        let rows = open_order_rows(&orders, None);
        assert_eq!(rows[0].status, OrderStatus::Pending);
        assert!(!rows[0].is_executable);
        assert!(!rows[0].is_stale);
    }

    #[test]
    fn evaluation_is_fresh_each_round() {
        let order =
            PendingOrder::next_price("sETH", SignedSize::new(dec!(1)), RoundId(10), Timestamp(0));

        let walk: Vec<OrderStatus> = (8..=13)
            .map(|round| order_status(order.target_round_id, RoundId(round)))
            .collect();

        assert_eq!(
            walk,
            [
                OrderStatus::Pending,
                OrderStatus::Pending,
                OrderStatus::Executable,
                OrderStatus::Executable,
                OrderStatus::Stale,
                OrderStatus::Stale,
            ]
        );
    }
}
