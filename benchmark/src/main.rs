use clap::Parser;
use hdrhistogram::Histogram;
use lob_match::{metrics, EventSink, Exchange, ExchangeConfig, Order, OrderEvent, OrderSide};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of orders to submit
    #[arg(short, long, default_value = "100000")]
    orders: u64,

    /// Number of distinct tickers the flow is spread over
    #[arg(short, long, default_value = "4")]
    tickers: usize,

    /// Share of market orders in the flow, between 0 and 1
    #[arg(short, long, default_value = "0.1")]
    market_ratio: f64,

    /// Seed for the order flow
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Exchange config file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Print the Prometheus metrics after the run
    #[arg(long)]
    metrics: bool,
}

/// Drops every event so sink cost stays out of the latency numbers
struct DiscardSink;

impl EventSink for DiscardSink {
    fn publish(&mut self, _event: &OrderEvent) {}
}

fn random_order(rng: &mut StdRng, tickers: &[String], market_ratio: f64) -> Order {
    let ticker = tickers[rng.gen_range(0..tickers.len())].clone();
    let side = if rng.gen_bool(0.5) {
        OrderSide::Buy
    } else {
        OrderSide::Sell
    };
    let size = Decimal::from(rng.gen_range(1..=100u32));
    if rng.gen_bool(market_ratio) {
        Order::market(ticker, side, size)
    } else {
        // cents around 50000.00
        let price = Decimal::new(5_000_000 + rng.gen_range(-500..=500i64), 2);
        Order::limit(ticker, side, size, price)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::try_init().unwrap_or_default();
    let args = Args::parse();
    anyhow::ensure!(args.tickers > 0, "at least one ticker is required");
    anyhow::ensure!(
        (0.0..=1.0).contains(&args.market_ratio),
        "market ratio must be between 0 and 1"
    );

    let config = ExchangeConfig::from_toml(&args.config);
    metrics::init_registry();
    let mut exchange = Exchange::with_sink(config.allow_market_queue, Box::new(DiscardSink));
    let tickers: Vec<String> = (0..args.tickers).map(|i| format!("T{:03}", i)).collect();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut histogram = Histogram::<u64>::new(3)?;

    println!(
        "Starting benchmark with {} orders over {} tickers, market ratio {}, market queue {}",
        args.orders, args.tickers, args.market_ratio, config.allow_market_queue
    );

    let started = Instant::now();
    let mut rejected = 0u64;
    for _ in 0..args.orders {
        let order = random_order(&mut rng, &tickers, args.market_ratio);
        let start = Instant::now();
        if !exchange.submit_order(order) {
            rejected += 1;
        }
        histogram.record(start.elapsed().as_nanos() as u64)?;
    }
    let elapsed = started.elapsed();

    println!("\nBenchmark Results:");
    println!("Total Orders: {}", args.orders);
    println!("Rejected: {}", rejected);
    println!("Trades: {}", exchange.trades().len());
    println!(
        "Average TPS: {:.2}",
        args.orders as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    println!("\nLatency Distribution (nanoseconds):");
    println!("p50: {}", histogram.value_at_percentile(50.0));
    println!("p90: {}", histogram.value_at_percentile(90.0));
    println!("p95: {}", histogram.value_at_percentile(95.0));
    println!("p99: {}", histogram.value_at_percentile(99.0));
    println!("p99.9: {}", histogram.value_at_percentile(99.9));

    for ticker in exchange.tickers() {
        if let Some(book) = exchange.order_book(ticker) {
            let snapshot = book.depth(config.depth);
            println!("\n{} bids {:?}", snapshot.ticker, snapshot.bids);
            println!("{} asks {:?}", snapshot.ticker, snapshot.asks);
        }
    }

    if args.metrics {
        println!("\n{}", metrics::gather_text());
    }
    Ok(())
}
