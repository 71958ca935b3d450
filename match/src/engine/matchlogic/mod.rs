//! Match Logic Module
//!
//! The crossing/pricing rule and the matching loop that drives one incoming
//! order through the opposite side of an `OrderBook` with price-time priority.

pub mod crossing;
pub mod matcher;

pub use matcher::MatchOutcome;
