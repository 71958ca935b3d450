//! Spot Market Module
//!
//! This module provides the exchange facade for spot instruments:
//! - `exchange`: admission, routing and lifecycle reporting
//! - `book_registry`: one order book per ticker, created lazily
//! - `order_registry`: accepted and rejected order records

pub mod book_registry;
pub mod exchange;
pub mod order_registry;

pub use book_registry::BookRegistry;
pub use exchange::Exchange;
pub use order_registry::OrderRegistry;
