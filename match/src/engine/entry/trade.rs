//! Trade Types and Structures
//!
//! A trade is one crossing step between an aggressor and a resting order.

use super::order::{OrderId, OrderSide};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Represents a completed trade in the system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique identifier for the trade
    pub id: Uuid,
    /// Instrument the trade happened on
    pub ticker: String,
    /// Price at which the trade was executed
    pub price: Decimal,
    /// Quantity of the trade
    pub quantity: Decimal,
    /// ID of the buyer's order
    pub buyer_order_id: OrderId,
    /// ID of the seller's order
    pub seller_order_id: OrderId,
    /// Side of the incoming order that initiated the trade
    pub aggressor_side: OrderSide,
    /// Timestamp when the trade was created
    pub created_at: SystemTime,
}

impl Trade {
    /// Creates a trade between an aggressor and the resting order it crossed
    pub fn new(
        ticker: String,
        price: Decimal,
        quantity: Decimal,
        aggressor_id: OrderId,
        aggressor_side: OrderSide,
        resting_id: OrderId,
    ) -> Self {
        let (buyer_order_id, seller_order_id) = match aggressor_side {
            OrderSide::Buy => (aggressor_id, resting_id),
            OrderSide::Sell => (resting_id, aggressor_id),
        };
        Self {
            id: Uuid::new_v4(),
            ticker,
            price,
            quantity,
            buyer_order_id,
            seller_order_id,
            aggressor_side,
            created_at: SystemTime::now(),
        }
    }

    pub fn taker_order_id(&self) -> OrderId {
        match self.aggressor_side {
            OrderSide::Buy => self.buyer_order_id,
            OrderSide::Sell => self.seller_order_id,
        }
    }

    pub fn maker_order_id(&self) -> OrderId {
        match self.aggressor_side {
            OrderSide::Buy => self.seller_order_id,
            OrderSide::Sell => self.buyer_order_id,
        }
    }

    /// Calculates the notional of the trade, `None` if it overflows `Decimal`
    pub fn total_amount(&self) -> Option<Decimal> {
        self.price.checked_mul(self.quantity)
    }
}
