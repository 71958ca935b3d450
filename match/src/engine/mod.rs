//! Match Engine Module
//!
//! This module contains the core components of the matching engine:
//! - `entry`: Orders, fills and trades
//! - `data`: Price levels, book sides and the per-instrument order book
//! - `matchlogic`: Crossing/pricing rules and the matching loop
//! - `spot`: The exchange facade and its registries

pub mod data;
pub mod entry;
pub mod matchlogic;
pub mod spot;

pub use data::{AskSide, BidSide, BookSide, DepthSnapshot, OrderBook};
pub use entry::{Fill, Order, OrderId, OrderSide, OrderStatus, OrderType, Trade};
pub use matchlogic::MatchOutcome;
pub use spot::Exchange;
