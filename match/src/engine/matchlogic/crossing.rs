//! Crossing and pricing rules
//!
//! Decides whether an aggressor can trade against a resting side, and at
//! which price and quantity a single crossing step executes.

use crate::engine::data::SideOrdering;
use crate::engine::entry::{Order, OrderType};
use rust_decimal::Decimal;

/// Whether an aggressor limit price reaches the best price of side `S`.
///
/// `S` is the resting side. A buy crosses asks when `limit >= best`, a sell
/// crosses bids when `limit <= best`; in the resting side's own ordering both
/// reduce to "the limit is not more aggressive than the best".
pub fn crosses<S: SideOrdering>(limit: Decimal, best: Decimal) -> bool {
    S::key(limit) <= S::key(best)
}

/// Price of one crossing step.
///
/// A limit resting order always sets the price (maker price). A market
/// resting order takes the aggressor's limit price. Returns `None` only when
/// neither leg carries a price.
pub fn execution_price(aggressor: &Order, resting: &Order) -> Option<Decimal> {
    match resting.order_type() {
        OrderType::Limit => resting.price(),
        OrderType::Market => aggressor.price(),
    }
}

pub fn execution_quantity(aggressor: &Order, resting: &Order) -> Decimal {
    aggressor.residual_size().min(resting.residual_size())
}
