//! Exchange Facade Module
//!
//! Admission checks, instrument routing and order bookkeeping around the
//! per-ticker order books.

use super::book_registry::BookRegistry;
use super::order_registry::OrderRegistry;
use crate::config::ExchangeConfig;
use crate::engine::data::OrderBook;
use crate::engine::entry::{Order, OrderId, Trade};
use crate::error::ValidationError;
use crate::events::{EventSink, LogSink, OrderEvent};
use crate::metrics;
use log::{info, warn};
use rust_decimal::prelude::ToPrimitive;

/// Entry point for order flow across all instruments
pub struct Exchange {
    allow_market_queue: bool,
    books: BookRegistry,
    orders: OrderRegistry,
    /// Every trade, in execution order
    trades: Vec<Trade>,
    sink: Box<dyn EventSink>,
}

impl Default for Exchange {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Exchange {
    /// Creates an exchange reporting lifecycle events through the log
    pub fn new(allow_market_queue: bool) -> Self {
        Self::with_sink(allow_market_queue, Box::new(LogSink))
    }

    pub fn with_config(config: &ExchangeConfig) -> Self {
        Self::new(config.allow_market_queue)
    }

    pub fn with_sink(allow_market_queue: bool, sink: Box<dyn EventSink>) -> Self {
        Self {
            allow_market_queue,
            books: BookRegistry::new(),
            orders: OrderRegistry::new(),
            trades: Vec::new(),
            sink,
        }
    }

    /// Validates `order` and, if it is admissible, matches it and rests any
    /// residual. Returns false when the order was rejected; it is then
    /// flagged with an error and kept with the rejected orders.
    pub fn submit_order(&mut self, mut order: Order) -> bool {
        let _timer = metrics::SUBMIT_HISTOGRAM.start_timer();
        self.sink.publish(&OrderEvent::submitted(&order));

        if let Err(e) = self.admit(&order) {
            warn!("rejected order {} on {}: {}", order.id(), order.ticker(), e);
            order.mark_rejected();
            self.sink.publish(&OrderEvent::rejected(&order, e.to_string()));
            metrics::record_order(metrics::REJECTED);
            self.orders.reject(order);
            return false;
        }

        let book = self
            .books
            .get_or_create(order.ticker(), self.allow_market_queue);
        let outcome = book.process_order(&mut order, self.orders.accepted_mut());

        for (trade, execution) in outcome.trades.iter().zip(&outcome.executions) {
            metrics::record_trade(trade.quantity.to_f64().unwrap_or_default());
            self.sink.publish(&OrderEvent::traded(trade));
            if let Some(resting) = self.orders.accepted().get(&execution.resting_id) {
                if let Some(event) = OrderEvent::fill_state(resting) {
                    self.sink.publish(&event);
                }
                if execution.resting_left_book {
                    self.sink.publish(&OrderEvent::left_book(resting));
                }
            }
        }
        if let Some(event) = OrderEvent::fill_state(&order) {
            self.sink.publish(&event);
        }
        if outcome.rested {
            self.sink.publish(&OrderEvent::rested(&order));
        }

        info!(
            "accepted order {} on {}: {:?}, {} trade(s), residual {}",
            order.id(),
            order.ticker(),
            order.status(),
            outcome.trades.len(),
            order.residual_size()
        );
        metrics::record_order(metrics::ACCEPTED);
        self.trades.extend(outcome.trades);
        self.orders.accept(order);
        true
    }

    fn admit(&self, order: &Order) -> Result<(), ValidationError> {
        order.validate()?;
        if self.orders.is_known(&order.id()) {
            return Err(ValidationError::DuplicateOrderId(order.id()));
        }
        Ok(())
    }

    /// Looks up an order among accepted orders, then rejected ones
    pub fn get_order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn order_book(&self, ticker: &str) -> Option<&OrderBook> {
        self.books.get(ticker)
    }

    pub fn tickers(&self) -> Vec<&str> {
        self.books.tickers()
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn trades_for<'a>(&'a self, ticker: &'a str) -> impl Iterator<Item = &'a Trade> + 'a {
        self.trades.iter().filter(move |trade| trade.ticker == ticker)
    }

    pub fn accepted_count(&self) -> usize {
        self.orders.accepted().len()
    }

    pub fn rejected_count(&self) -> usize {
        self.orders.rejected().len()
    }

    pub fn allows_market_queue(&self) -> bool {
        self.allow_market_queue
    }
}
