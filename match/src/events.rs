//! Order lifecycle events
//!
//! The exchange reports what happens to each order through an `EventSink`.
//! `LogSink` writes every event as a JSON line through the `log` facade;
//! `MemorySink` keeps them in memory for inspection.

use crate::engine::entry::{Order, OrderId, OrderSide, OrderType, Trade};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum OrderEvent {
    Submitted {
        order_id: OrderId,
        ticker: String,
        order_type: OrderType,
        side: OrderSide,
        size: Decimal,
        price: Option<Decimal>,
    },
    Rejected {
        order_id: OrderId,
        ticker: String,
        reason: String,
    },
    Traded {
        trade_id: Uuid,
        ticker: String,
        price: Decimal,
        quantity: Decimal,
        buyer_order_id: OrderId,
        seller_order_id: OrderId,
    },
    PartiallyFilled {
        order_id: OrderId,
        ticker: String,
        residual_size: Decimal,
        avg_fill_price: Decimal,
    },
    Filled {
        order_id: OrderId,
        ticker: String,
        avg_fill_price: Decimal,
    },
    Rested {
        order_id: OrderId,
        ticker: String,
        side: OrderSide,
        price: Option<Decimal>,
        residual_size: Decimal,
    },
    LeftBook {
        order_id: OrderId,
        ticker: String,
        side: OrderSide,
    },
}

impl OrderEvent {
    pub fn submitted(order: &Order) -> Self {
        OrderEvent::Submitted {
            order_id: order.id(),
            ticker: order.ticker().to_string(),
            order_type: order.order_type(),
            side: order.side(),
            size: order.size(),
            price: order.price(),
        }
    }

    pub fn rejected(order: &Order, reason: String) -> Self {
        OrderEvent::Rejected {
            order_id: order.id(),
            ticker: order.ticker().to_string(),
            reason,
        }
    }

    pub fn traded(trade: &Trade) -> Self {
        OrderEvent::Traded {
            trade_id: trade.id,
            ticker: trade.ticker.clone(),
            price: trade.price,
            quantity: trade.quantity,
            buyer_order_id: trade.buyer_order_id,
            seller_order_id: trade.seller_order_id,
        }
    }

    /// `Filled` or `PartiallyFilled` depending on the order's state, `None`
    /// if it has not traded
    pub fn fill_state(order: &Order) -> Option<Self> {
        if order.is_filled() {
            Some(OrderEvent::Filled {
                order_id: order.id(),
                ticker: order.ticker().to_string(),
                avg_fill_price: order.avg_fill_price(),
            })
        } else if !order.matches().is_empty() {
            Some(OrderEvent::PartiallyFilled {
                order_id: order.id(),
                ticker: order.ticker().to_string(),
                residual_size: order.residual_size(),
                avg_fill_price: order.avg_fill_price(),
            })
        } else {
            None
        }
    }

    pub fn rested(order: &Order) -> Self {
        OrderEvent::Rested {
            order_id: order.id(),
            ticker: order.ticker().to_string(),
            side: order.side(),
            price: order.price(),
            residual_size: order.residual_size(),
        }
    }

    pub fn left_book(order: &Order) -> Self {
        OrderEvent::LeftBook {
            order_id: order.id(),
            ticker: order.ticker().to_string(),
            side: order.side(),
        }
    }

    pub fn order_id(&self) -> Option<OrderId> {
        match self {
            OrderEvent::Submitted { order_id, .. }
            | OrderEvent::Rejected { order_id, .. }
            | OrderEvent::PartiallyFilled { order_id, .. }
            | OrderEvent::Filled { order_id, .. }
            | OrderEvent::Rested { order_id, .. }
            | OrderEvent::LeftBook { order_id, .. } => Some(*order_id),
            OrderEvent::Traded { .. } => None,
        }
    }
}

/// Destination for order lifecycle events
pub trait EventSink: Send {
    fn publish(&mut self, event: &OrderEvent);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn publish(&mut self, event: &OrderEvent) {
        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                log::error!("failed to serialize order event {:?}: {}", event, e);
                return;
            }
        };
        match event {
            OrderEvent::Rejected { .. } => log::warn!("{}", line),
            OrderEvent::Traded { .. } => log::debug!("{}", line),
            _ => log::info!("{}", line),
        }
    }
}

/// Collects events; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<OrderEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<OrderEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for MemorySink {
    fn publish(&mut self, event: &OrderEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}
