//! Limit order book matching engine
//!
//! Orders enter through [`Exchange::submit_order`], which validates them,
//! routes them to the order book of their ticker, and matches them against
//! the opposite side with price-time priority. Limit-versus-limit trades
//! execute at the resting order's price; a market order trades at the price
//! of the limit order it meets. Residual limit orders rest in FIFO price
//! levels; residual market orders rest in a market queue when enabled.
//!
//! ```
//! use lob_match::{Exchange, Order, OrderSide, OrderStatus};
//! use rust_decimal_macros::dec;
//!
//! let mut exchange = Exchange::new(true);
//! let bid = Order::limit("AAA", OrderSide::Buy, dec!(10), dec!(100));
//! let ask = Order::limit("AAA", OrderSide::Sell, dec!(10), dec!(100));
//! let (bid_id, ask_id) = (bid.id(), ask.id());
//!
//! assert!(exchange.submit_order(bid));
//! assert!(exchange.submit_order(ask));
//! assert_eq!(exchange.get_order(&bid_id).unwrap().status(), OrderStatus::Filled);
//! assert_eq!(exchange.get_order(&ask_id).unwrap().matches()[0].counterparty, bid_id);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod metrics;

pub use config::ExchangeConfig;
pub use engine::{
    DepthSnapshot, Exchange, Fill, Order, OrderBook, OrderId, OrderSide, OrderStatus, OrderType,
    Trade,
};
pub use error::{ConfigError, ValidationError};
pub use events::{EventSink, LogSink, MemorySink, OrderEvent};
