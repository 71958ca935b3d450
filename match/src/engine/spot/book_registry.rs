//! Instrument Registry Module
//!
//! Owns one `OrderBook` per ticker. Books are created on the first order for
//! a ticker and never shared between tickers.

use crate::engine::data::OrderBook;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct BookRegistry {
    /// Map of tickers to their order books
    books: HashMap<String, OrderBook>,
}

impl BookRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            books: HashMap::new(),
        }
    }

    /// Returns the book for `ticker`, creating it on first use
    pub fn get_or_create(&mut self, ticker: &str, allow_market_queue: bool) -> &mut OrderBook {
        if !self.books.contains_key(ticker) {
            log::info!("creating order book for {}", ticker);
            self.books.insert(
                ticker.to_string(),
                OrderBook::new(ticker.to_string(), allow_market_queue),
            );
        }
        match self.books.get_mut(ticker) {
            Some(book) => book,
            None => unreachable!("order book for {} was just inserted", ticker),
        }
    }

    /// Retrieves a ticker's order book
    pub fn get(&self, ticker: &str) -> Option<&OrderBook> {
        self.books.get(ticker)
    }

    /// Lists tickers that have a book, sorted
    pub fn tickers(&self) -> Vec<&str> {
        let mut tickers: Vec<&str> = self.books.keys().map(String::as_str).collect();
        tickers.sort_unstable();
        tickers
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
