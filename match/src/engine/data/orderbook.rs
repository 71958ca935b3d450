use super::book_side::{AskSide, BidSide};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bid and ask sides of a single instrument. Matching lives in
/// `matchlogic::matcher`.
#[derive(Debug, Clone)]
pub struct OrderBook {
    pub(crate) ticker: String,
    pub(crate) bids: BidSide,
    pub(crate) asks: AskSide,
    allow_market_queue: bool,
}

/// Aggregated top of book, best levels first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    pub ticker: String,
    pub bids: Vec<(Decimal, Decimal)>,
    pub asks: Vec<(Decimal, Decimal)>,
}

impl OrderBook {
    pub fn new(ticker: String, allow_market_queue: bool) -> Self {
        Self {
            ticker,
            bids: BidSide::new(allow_market_queue),
            asks: AskSide::new(allow_market_queue),
            allow_market_queue,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn allows_market_queue(&self) -> bool {
        self.allow_market_queue
    }

    pub fn bids(&self) -> &BidSide {
        &self.bids
    }

    pub fn asks(&self) -> &AskSide {
        &self.asks
    }

    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.best_price()
    }

    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.best_price()
    }

    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_ask(), self.best_bid()) {
            (Some(ask), Some(bid)) => Some(ask - bid),
            _ => None,
        }
    }

    pub fn depth(&self, depth: usize) -> DepthSnapshot {
        DepthSnapshot {
            ticker: self.ticker.clone(),
            bids: self.bids.depth(depth),
            asks: self.asks.depth(depth),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
