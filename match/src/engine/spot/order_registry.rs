//! Order Registry Module
//!
//! Authoritative storage for every order the exchange has seen. Accepted and
//! rejected orders are kept apart and neither is ever evicted.

use crate::engine::entry::{Order, OrderId, OrderMap};

#[derive(Debug, Clone, Default)]
pub struct OrderRegistry {
    accepted: OrderMap,
    rejected: OrderMap,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, order: Order) {
        let previous = self.accepted.insert(order.id(), order);
        assert!(previous.is_none(), "order id accepted twice");
    }

    pub fn reject(&mut self, order: Order) {
        self.rejected.insert(order.id(), order);
    }

    /// Accepted orders, the arena book sides resolve ids against
    pub fn accepted_mut(&mut self) -> &mut OrderMap {
        &mut self.accepted
    }

    pub fn accepted(&self) -> &OrderMap {
        &self.accepted
    }

    pub fn rejected(&self) -> &OrderMap {
        &self.rejected
    }

    /// Looks in accepted orders first, then rejected ones
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.accepted.get(id).or_else(|| self.rejected.get(id))
    }

    pub fn is_known(&self, id: &OrderId) -> bool {
        self.accepted.contains_key(id) || self.rejected.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::entry::OrderSide;
    use rust_decimal_macros::dec;

    #[test]
    fn test_get_searches_both_maps() {
        let mut registry = OrderRegistry::new();
        let good = Order::limit("AAA", OrderSide::Buy, dec!(1), dec!(1));
        let bad = Order::limit("AAA", OrderSide::Buy, dec!(1), dec!(0));
        let (good_id, bad_id) = (good.id(), bad.id());

        registry.accept(good);
        registry.reject(bad);

        assert!(registry.accepted().contains_key(&good_id));
        assert!(registry.rejected().contains_key(&bad_id));
        assert_eq!(registry.get(&good_id).map(Order::id), Some(good_id));
        assert_eq!(registry.get(&bad_id).map(Order::id), Some(bad_id));
        assert!(registry.get(&OrderId::new()).is_none());
        assert!(!registry.is_known(&OrderId::new()));
    }
}
