use crate::engine::data::{BookSide, Execution, OrderBook, SideOrdering};
use crate::engine::entry::{Order, OrderMap, OrderSide, OrderType, Trade};
use log::debug;

/// Everything one call to `OrderBook::process_order` did
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    pub trades: Vec<Trade>,
    pub executions: Vec<Execution>,
    /// The incoming order now rests on its own side
    pub rested: bool,
}

impl OrderBook {
    /// Matches `order` against the opposite side until it is filled or no
    /// crossing liquidity remains, then rests what is left on its own side.
    ///
    /// Resting orders are resolved and updated through `orders`; `order`
    /// itself must not be in `orders` yet.
    pub fn process_order(&mut self, order: &mut Order, orders: &mut OrderMap) -> MatchOutcome {
        debug_assert_eq!(order.ticker(), self.ticker);
        debug_assert!(!orders.contains_key(&order.id()));
        let OrderBook {
            ticker, bids, asks, ..
        } = self;
        match order.side() {
            OrderSide::Buy => cross(ticker, asks, bids, order, orders),
            OrderSide::Sell => cross(ticker, bids, asks, order, orders),
        }
    }
}

fn can_trade<C: SideOrdering>(contra: &BookSide<C>, order: &Order) -> bool {
    contra.crosses(order) || (order.order_type() == OrderType::Limit && contra.has_market())
}

fn cross<C: SideOrdering, O: SideOrdering>(
    ticker: &str,
    contra: &mut BookSide<C>,
    own: &mut BookSide<O>,
    order: &mut Order,
    orders: &mut OrderMap,
) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();

    while !order.is_filled() && can_trade(contra, order) {
        let execution = contra.match_order(order, orders);
        order.update(execution.quantity, execution.price, execution.resting_id);
        debug!(
            "{}: {} x {} @ {} against {}",
            ticker,
            order.id(),
            execution.quantity,
            execution.price,
            execution.resting_id
        );
        outcome.trades.push(Trade::new(
            ticker.to_string(),
            execution.price,
            execution.quantity,
            order.id(),
            O::SIDE,
            execution.resting_id,
        ));
        outcome.executions.push(execution);
    }

    if !order.is_filled() {
        outcome.rested = own.add(order);
        if !outcome.rested {
            debug!(
                "{}: market order {} has no liquidity and market queueing is off, residual {}",
                ticker,
                order.id(),
                order.residual_size()
            );
        }
    }
    outcome
}
