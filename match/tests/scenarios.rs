use lob_match::{Exchange, Order, OrderId, OrderSide, OrderStatus, OrderType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn submit(exchange: &mut Exchange, order: Order) -> OrderId {
    let id = order.id();
    assert!(exchange.submit_order(order), "order {} was rejected", id);
    id
}

fn limit(exchange: &mut Exchange, ticker: &str, side: OrderSide, size: Decimal, price: Decimal) -> OrderId {
    submit(exchange, Order::limit(ticker, side, size, price))
}

fn status(exchange: &Exchange, id: OrderId) -> OrderStatus {
    exchange.get_order(&id).unwrap().status()
}

#[test]
fn round_trip_fills_both_orders_and_empties_book() {
    let mut exchange = Exchange::new(true);
    let buy = limit(&mut exchange, "AAA", OrderSide::Buy, dec!(10), dec!(100));
    let sell = limit(&mut exchange, "AAA", OrderSide::Sell, dec!(10), dec!(100));

    for (id, counterparty) in [(buy, sell), (sell, buy)] {
        let order = exchange.get_order(&id).unwrap();
        assert_eq!(order.status(), OrderStatus::Filled);
        assert_eq!(order.residual_size(), Decimal::ZERO);
        assert_eq!(order.matches().len(), 1);
        let fill = order.matches()[0];
        assert_eq!(fill.quantity, dec!(10));
        assert_eq!(fill.price, dec!(100));
        assert_eq!(fill.counterparty, counterparty);
    }

    let book = exchange.order_book("AAA").unwrap();
    assert_eq!(book.best_bid(), None);
    assert_eq!(book.best_ask(), None);
}

#[test]
fn partial_fill_rests_residual_on_bid() {
    let mut exchange = Exchange::new(true);
    let sell = limit(&mut exchange, "AAA", OrderSide::Sell, dec!(5), dec!(100));
    let buy = limit(&mut exchange, "AAA", OrderSide::Buy, dec!(8), dec!(100));

    let sell_order = exchange.get_order(&sell).unwrap();
    assert_eq!(sell_order.status(), OrderStatus::Filled);
    assert_eq!(sell_order.residual_size(), Decimal::ZERO);

    let buy_order = exchange.get_order(&buy).unwrap();
    assert_eq!(buy_order.status(), OrderStatus::PartiallyFilled);
    assert_eq!(buy_order.residual_size(), dec!(3));

    let book = exchange.order_book("AAA").unwrap();
    assert_eq!(book.best_bid(), Some(dec!(100)));
    assert_eq!(book.bids().best_volume(), dec!(3));
    assert_eq!(book.bids().orders_at(dec!(100)), vec![buy]);
    assert_eq!(book.best_ask(), None);
}

#[test]
fn aggressor_trades_at_maker_price() {
    let mut exchange = Exchange::new(true);
    let sell = limit(&mut exchange, "AAA", OrderSide::Sell, dec!(10), dec!(100));
    let buy = limit(&mut exchange, "AAA", OrderSide::Buy, dec!(10), dec!(101));

    for id in [sell, buy] {
        let order = exchange.get_order(&id).unwrap();
        assert_eq!(order.matches()[0].price, dec!(100));
        assert_eq!(order.avg_fill_price(), dec!(100));
    }
    assert_eq!(exchange.trades()[0].price, dec!(100));
}

#[test]
fn earlier_order_at_same_price_fills_first() {
    let mut exchange = Exchange::new(true);
    let first = limit(&mut exchange, "AAA", OrderSide::Sell, dec!(4), dec!(100));
    let second = limit(&mut exchange, "AAA", OrderSide::Sell, dec!(4), dec!(100));

    limit(&mut exchange, "AAA", OrderSide::Buy, dec!(3), dec!(100));
    assert_eq!(status(&exchange, first), OrderStatus::PartiallyFilled);
    assert_eq!(status(&exchange, second), OrderStatus::Unfilled);

    limit(&mut exchange, "AAA", OrderSide::Buy, dec!(3), dec!(100));
    assert_eq!(status(&exchange, first), OrderStatus::Filled);
    assert_eq!(status(&exchange, second), OrderStatus::PartiallyFilled);
    assert_eq!(exchange.get_order(&second).unwrap().residual_size(), dec!(2));

    let book = exchange.order_book("AAA").unwrap();
    assert_eq!(book.asks().orders_at(dec!(100)), vec![second]);
    assert_eq!(book.asks().best_volume(), dec!(2));
}

#[test]
fn better_price_beats_earlier_time() {
    let mut exchange = Exchange::new(true);
    let early = limit(&mut exchange, "AAA", OrderSide::Buy, dec!(1), dec!(100));
    let better = limit(&mut exchange, "AAA", OrderSide::Buy, dec!(1), dec!(101));

    limit(&mut exchange, "AAA", OrderSide::Sell, dec!(1), dec!(99));
    assert_eq!(status(&exchange, better), OrderStatus::Filled);
    assert_eq!(status(&exchange, early), OrderStatus::Unfilled);
    assert_eq!(exchange.trades()[0].price, dec!(101));
}

#[test]
fn queued_market_order_is_priced_by_limit() {
    let mut exchange = Exchange::new(true);
    let buy = submit(&mut exchange, Order::market("AAA", OrderSide::Buy, dec!(10)));

    let queued = exchange.get_order(&buy).unwrap();
    assert_eq!(queued.status(), OrderStatus::Unfilled);
    assert_eq!(queued.residual_size(), dec!(10));
    assert_eq!(exchange.order_book("AAA").unwrap().bids().market_orders(), vec![buy]);

    let sell = limit(&mut exchange, "AAA", OrderSide::Sell, dec!(10), dec!(50));
    for id in [buy, sell] {
        let order = exchange.get_order(&id).unwrap();
        assert_eq!(order.status(), OrderStatus::Filled);
        assert_eq!(order.matches()[0].price, dec!(50));
    }
    assert!(exchange.order_book("AAA").unwrap().is_empty());
}

#[test]
fn queued_market_orders_fill_before_limit_levels() {
    let mut exchange = Exchange::new(true);
    let resting_bid = limit(&mut exchange, "AAA", OrderSide::Buy, dec!(5), dec!(100));
    let market_bid = submit(&mut exchange, Order::market("AAA", OrderSide::Buy, dec!(2)));

    let sell = limit(&mut exchange, "AAA", OrderSide::Sell, dec!(4), dec!(95));

    assert_eq!(status(&exchange, market_bid), OrderStatus::Filled);
    assert_eq!(status(&exchange, resting_bid), OrderStatus::PartiallyFilled);
    let fills = exchange.get_order(&sell).unwrap().matches().to_vec();
    assert_eq!(fills.len(), 2);
    assert_eq!((fills[0].counterparty, fills[0].price), (market_bid, dec!(95)));
    assert_eq!((fills[1].counterparty, fills[1].price), (resting_bid, dec!(100)));
}

#[test]
fn market_order_sweeps_then_queues_residual() {
    let mut exchange = Exchange::new(true);
    limit(&mut exchange, "AAA", OrderSide::Sell, dec!(2), dec!(100));
    limit(&mut exchange, "AAA", OrderSide::Sell, dec!(3), dec!(105));

    let buy = submit(&mut exchange, Order::market("AAA", OrderSide::Buy, dec!(7)));
    let order = exchange.get_order(&buy).unwrap();
    assert_eq!(order.status(), OrderStatus::PartiallyFilled);
    assert_eq!(order.residual_size(), dec!(2));
    assert_eq!(order.avg_fill_price(), dec!(103));
    assert_eq!(exchange.order_book("AAA").unwrap().bids().market_orders(), vec![buy]);
}

#[test]
fn unqueued_market_order_is_not_rested() {
    let mut exchange = Exchange::new(false);
    limit(&mut exchange, "AAA", OrderSide::Sell, dec!(2), dec!(100));
    let buy = submit(&mut exchange, Order::market("AAA", OrderSide::Buy, dec!(5)));

    let order = exchange.get_order(&buy).unwrap();
    assert_eq!(order.status(), OrderStatus::PartiallyFilled);
    assert_eq!(order.residual_size(), dec!(3));

    let book = exchange.order_book("AAA").unwrap();
    assert!(book.is_empty());
    assert_eq!(book.bids().market_len(), 0);

    // a later sell finds nothing to trade with
    let sell = limit(&mut exchange, "AAA", OrderSide::Sell, dec!(3), dec!(90));
    assert_eq!(status(&exchange, sell), OrderStatus::Unfilled);
}

#[test]
fn zero_price_limit_is_rejected_but_findable() {
    let mut exchange = Exchange::new(true);
    let order = Order::new("AAA", OrderType::Limit, OrderSide::Buy, dec!(10), Some(dec!(0)));
    let id = order.id();

    assert!(!exchange.submit_order(order));
    let stored = exchange.get_order(&id).unwrap();
    assert!(stored.has_error());
    assert_eq!(stored.status(), OrderStatus::Unfilled);
    assert!(stored.matches().is_empty());
}

#[test]
fn limit_without_price_is_rejected() {
    let mut exchange = Exchange::new(true);
    let order = Order::new("AAA", OrderType::Limit, OrderSide::Sell, dec!(1), None);
    let id = order.id();
    assert!(!exchange.submit_order(order));
    assert!(exchange.get_order(&id).unwrap().has_error());
}

#[test]
fn tickers_never_match_each_other() {
    let mut exchange = Exchange::new(true);
    let aaa = limit(&mut exchange, "AAA", OrderSide::Buy, dec!(10), dec!(100));
    let bbb = limit(&mut exchange, "BBB", OrderSide::Sell, dec!(10), dec!(100));

    assert_eq!(status(&exchange, aaa), OrderStatus::Unfilled);
    assert_eq!(status(&exchange, bbb), OrderStatus::Unfilled);
    assert!(exchange.trades().is_empty());
    assert_eq!(exchange.tickers(), vec!["AAA", "BBB"]);
    assert_eq!(exchange.order_book("AAA").unwrap().best_ask(), None);
    assert_eq!(exchange.order_book("BBB").unwrap().best_bid(), None);
}

#[test]
fn unknown_order_id_is_absent() {
    let exchange = Exchange::default();
    assert!(exchange.get_order(&OrderId::new()).is_none());
}

#[test]
fn depth_snapshot_aggregates_levels() {
    let mut exchange = Exchange::new(true);
    limit(&mut exchange, "AAA", OrderSide::Buy, dec!(1), dec!(99));
    limit(&mut exchange, "AAA", OrderSide::Buy, dec!(2), dec!(99));
    limit(&mut exchange, "AAA", OrderSide::Buy, dec!(4), dec!(98));
    limit(&mut exchange, "AAA", OrderSide::Sell, dec!(3), dec!(101));
    limit(&mut exchange, "AAA", OrderSide::Sell, dec!(5), dec!(102));

    let snapshot = exchange.order_book("AAA").unwrap().depth(1);
    assert_eq!(snapshot.ticker, "AAA");
    assert_eq!(snapshot.bids, vec![(dec!(99), dec!(3))]);
    assert_eq!(snapshot.asks, vec![(dec!(101), dec!(3))]);
    assert_eq!(exchange.order_book("AAA").unwrap().spread(), Some(dec!(2)));
}
