//! Metrics collection module for the matching engine
//!
//! Counters and latency histograms for order admission and matching,
//! exposed through a Prometheus registry.

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry, TextEncoder};

lazy_static! {
    /// Global Prometheus registry instance
    pub static ref REGISTRY_INSTANCE: Registry = Registry::new();

    /// Submitted orders by admission outcome (`accepted` / `rejected`)
    pub static ref ORDER_COUNTER_VEC: CounterVec =
        CounterVec::new(Opts::new("order_counter", "order counter"), &["outcome"]).unwrap();

    /// Crossing steps executed
    pub static ref TRADE_COUNTER: Counter =
        Counter::new("trade_counter", "trade counter").unwrap();

    /// Total quantity traded
    pub static ref TRADED_VOLUME: Counter =
        Counter::new("traded_volume", "traded volume").unwrap();

    /// Time spent in `Exchange::submit_order`
    pub static ref SUBMIT_HISTOGRAM: Histogram =
        Histogram::with_opts(HistogramOpts::new("submit_cost", "submit order cost")).unwrap();
}

pub const ACCEPTED: &str = "accepted";
pub const REJECTED: &str = "rejected";

/// Initializes the metrics registry
///
/// Registers all metric collectors with the global registry
pub fn init_registry() {
    let _ = REGISTRY_INSTANCE.register(Box::new(ORDER_COUNTER_VEC.clone()));
    let _ = REGISTRY_INSTANCE.register(Box::new(TRADE_COUNTER.clone()));
    let _ = REGISTRY_INSTANCE.register(Box::new(TRADED_VOLUME.clone()));
    let _ = REGISTRY_INSTANCE.register(Box::new(SUBMIT_HISTOGRAM.clone()));
}

pub fn record_order(outcome: &str) {
    ORDER_COUNTER_VEC.with_label_values(&[outcome]).inc();
}

pub fn record_trade(quantity: f64) {
    TRADE_COUNTER.inc();
    TRADED_VOLUME.inc_by(quantity);
}

/// Renders the registry in the Prometheus text exposition format
pub fn gather_text() -> String {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    if let Err(e) = encoder.encode(&REGISTRY_INSTANCE.gather(), &mut buffer) {
        log::error!("failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
