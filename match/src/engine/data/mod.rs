//! Data Structures Module
//!
//! Book storage for one instrument: FIFO price levels, the two strategy
//! specialized book sides, and the order book pairing them.

pub mod book_side;
pub mod orderbook;
pub mod price_level;

pub use book_side::{AskOrdering, AskSide, BidOrdering, BidSide, BookSide, Execution, SideOrdering};
pub use orderbook::{DepthSnapshot, OrderBook};
pub use price_level::PriceLevel;
