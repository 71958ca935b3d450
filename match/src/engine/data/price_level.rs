//! FIFO queue of resting orders at one price.

use crate::engine::entry::OrderId;
use rust_decimal::Decimal;
use std::collections::VecDeque;

/// Orders resting at a single price, oldest first, plus their aggregate
/// residual size.
#[derive(Debug, Clone, Default)]
pub struct PriceLevel {
    orders: VecDeque<OrderId>,
    volume: Decimal,
}

impl PriceLevel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an order behind everything already at this level
    pub fn push_back(&mut self, order_id: OrderId, residual: Decimal) {
        self.orders.push_back(order_id);
        self.volume += residual;
    }

    pub fn front(&self) -> Option<OrderId> {
        self.orders.front().copied()
    }

    pub fn pop_front(&mut self) -> Option<OrderId> {
        self.orders.pop_front()
    }

    /// Takes `quantity` out of the aggregate volume after a fill
    pub fn reduce(&mut self, quantity: Decimal) {
        assert!(
            quantity <= self.volume,
            "price level volume {} cannot absorb a fill of {}",
            self.volume,
            quantity
        );
        self.volume -= quantity;
    }

    pub fn volume(&self) -> Decimal {
        self.volume
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderId> {
        self.orders.iter()
    }
}
