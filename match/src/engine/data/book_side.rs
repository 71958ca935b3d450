//! One side of an instrument's book
//!
//! Limit orders are grouped into FIFO price levels. The most aggressive level
//! is tracked as `best_price`; every other live level sits in a heap ordered
//! by the side's `SideOrdering`, so promoting the next best level after the
//! current one empties is a single pop. Market orders, when queueing is
//! enabled, wait in their own FIFO until a limit order prices them.

use super::price_level::PriceLevel;
use crate::engine::entry::{Order, OrderId, OrderMap, OrderSide, OrderType};
use crate::engine::matchlogic::crossing;
use rust_decimal::Decimal;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::fmt::Debug;
use std::marker::PhantomData;

/// Price priority of one side of the book.
///
/// `key` maps a price into a value where greater means more aggressive, so a
/// max-heap of keys always yields the next best level.
pub trait SideOrdering: Debug + Clone + Default {
    type Key: Ord + Copy + Debug;

    const SIDE: OrderSide;

    fn key(price: Decimal) -> Self::Key;

    fn price(key: Self::Key) -> Decimal;

    fn more_aggressive(candidate: Decimal, than: Decimal) -> bool {
        Self::key(candidate) > Self::key(than)
    }
}

/// Bids: higher prices first
#[derive(Debug, Clone, Copy, Default)]
pub struct BidOrdering;

impl SideOrdering for BidOrdering {
    type Key = Decimal;

    const SIDE: OrderSide = OrderSide::Buy;

    fn key(price: Decimal) -> Decimal {
        price
    }

    fn price(key: Decimal) -> Decimal {
        key
    }
}

/// Asks: lower prices first
#[derive(Debug, Clone, Copy, Default)]
pub struct AskOrdering;

impl SideOrdering for AskOrdering {
    type Key = Reverse<Decimal>;

    const SIDE: OrderSide = OrderSide::Sell;

    fn key(price: Decimal) -> Reverse<Decimal> {
        Reverse(price)
    }

    fn price(key: Reverse<Decimal>) -> Decimal {
        key.0
    }
}

/// Result of one crossing step against a resting order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    pub resting_id: OrderId,
    pub quantity: Decimal,
    pub price: Decimal,
    /// The resting order was completely filled and removed from the side
    pub resting_left_book: bool,
}

#[derive(Debug, Clone)]
pub struct BookSide<S: SideOrdering> {
    best_price: Option<Decimal>,
    levels: HashMap<Decimal, PriceLevel>,
    /// Every live level except the one at `best_price`
    heap: BinaryHeap<S::Key>,
    /// `None` when market queueing is disabled
    market: Option<VecDeque<OrderId>>,
    ordering: PhantomData<S>,
}

pub type BidSide = BookSide<BidOrdering>;
pub type AskSide = BookSide<AskOrdering>;

impl<S: SideOrdering> BookSide<S> {
    pub fn new(allow_market_queue: bool) -> Self {
        Self {
            best_price: None,
            levels: HashMap::new(),
            heap: BinaryHeap::new(),
            market: allow_market_queue.then(VecDeque::new),
            ordering: PhantomData,
        }
    }

    pub fn side(&self) -> OrderSide {
        S::SIDE
    }

    /// Rests an order on this side. Returns false when the order has no
    /// resting representation, which happens only for market orders while
    /// queueing is disabled.
    pub fn add(&mut self, order: &Order) -> bool {
        debug_assert_eq!(order.side(), S::SIDE);
        let price = match (order.order_type(), order.price()) {
            (OrderType::Market, _) => {
                return match self.market.as_mut() {
                    Some(queue) => {
                        queue.push_back(order.id());
                        true
                    }
                    None => false,
                };
            }
            (OrderType::Limit, Some(price)) => price,
            (OrderType::Limit, None) => {
                panic!("limit order {} reached the book without a price", order.id())
            }
        };

        match self.best_price {
            None => self.best_price = Some(price),
            Some(best) if S::more_aggressive(price, best) => {
                self.heap.push(S::key(best));
                self.best_price = Some(price);
            }
            Some(best) => {
                if price != best && !self.levels.contains_key(&price) {
                    self.heap.push(S::key(price));
                }
            }
        }
        self.levels
            .entry(price)
            .or_default()
            .push_back(order.id(), order.residual_size());
        true
    }

    /// Fills the next resting order in priority against `aggressor` and
    /// returns the execution. The aggressor itself is left untouched.
    ///
    /// # Panics
    ///
    /// When the side has neither limit liquidity nor a market order the
    /// aggressor can price, or when a queued id is missing from `orders`.
    pub fn match_order(&mut self, aggressor: &Order, orders: &mut OrderMap) -> Execution {
        if aggressor.order_type() == OrderType::Limit {
            if let Some(queue) = self.market.as_mut() {
                if let Some(resting_id) = queue.front().copied() {
                    let execution = fill_resting(aggressor, resting_mut(orders, resting_id));
                    if execution.resting_left_book {
                        queue.pop_front();
                    }
                    return execution;
                }
            }
        }

        let best = match self.best_price {
            Some(best) => best,
            None => panic!(
                "match_order called on an illiquid {:?} side for order {}",
                S::SIDE,
                aggressor.id()
            ),
        };
        let (execution, level_emptied) = {
            let level = match self.levels.get_mut(&best) {
                Some(level) => level,
                None => panic!("best price {} has no price level", best),
            };
            let resting_id = match level.front() {
                Some(id) => id,
                None => panic!("best price level {} is empty", best),
            };
            let execution = fill_resting(aggressor, resting_mut(orders, resting_id));
            level.reduce(execution.quantity);
            if execution.resting_left_book {
                level.pop_front();
            }
            (execution, level.is_empty())
        };
        if level_emptied {
            self.levels.remove(&best);
            self.best_price = self.heap.pop().map(S::price);
        }
        execution
    }

    /// Whether `aggressor` can trade against the limit liquidity of this side
    pub fn crosses(&self, aggressor: &Order) -> bool {
        match (self.best_price, aggressor.price()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(best), Some(limit)) => crossing::crosses::<S>(limit, best),
        }
    }

    pub fn liquid(&self) -> bool {
        self.best_price.is_some()
    }

    pub fn has_market(&self) -> bool {
        self.market.as_ref().map_or(false, |queue| !queue.is_empty())
    }

    pub fn best_price(&self) -> Option<Decimal> {
        self.best_price
    }

    /// Aggregate residual size at `best_price`, zero when the side is empty
    pub fn best_volume(&self) -> Decimal {
        self.best_price
            .and_then(|best| self.levels.get(&best))
            .map_or(Decimal::ZERO, PriceLevel::volume)
    }

    pub fn volume_at(&self, price: Decimal) -> Option<Decimal> {
        self.levels.get(&price).map(PriceLevel::volume)
    }

    /// Ids resting at `price`, oldest first
    pub fn orders_at(&self, price: Decimal) -> Vec<OrderId> {
        self.levels
            .get(&price)
            .map(|level| level.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Queued market order ids, oldest first
    pub fn market_orders(&self) -> Vec<OrderId> {
        self.market
            .as_ref()
            .map(|queue| queue.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn market_len(&self) -> usize {
        self.market.as_ref().map_or(0, VecDeque::len)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty() && self.market_len() == 0
    }

    /// Up to `depth` (price, volume) pairs, best first
    pub fn depth(&self, depth: usize) -> Vec<(Decimal, Decimal)> {
        let mut keys: Vec<S::Key> = self.levels.keys().map(|price| S::key(*price)).collect();
        keys.sort_unstable_by(|a, b| b.cmp(a));
        keys.into_iter()
            .take(depth)
            .map(S::price)
            .filter_map(|price| self.volume_at(price).map(|volume| (price, volume)))
            .collect()
    }
}

fn resting_mut(orders: &mut OrderMap, id: OrderId) -> &mut Order {
    match orders.get_mut(&id) {
        Some(order) => order,
        None => panic!("order {} is queued on the book but missing from the registry", id),
    }
}

/// Applies one fill to the resting order and reports it
fn fill_resting(aggressor: &Order, resting: &mut Order) -> Execution {
    let price = match crossing::execution_price(aggressor, resting) {
        Some(price) => price,
        None => panic!(
            "orders {} and {} cannot price each other",
            aggressor.id(),
            resting.id()
        ),
    };
    let quantity = crossing::execution_quantity(aggressor, resting);
    let applied = resting.update(quantity, price, aggressor.id());
    debug_assert_eq!(applied, quantity);
    Execution {
        resting_id: resting.id(),
        quantity,
        price,
        resting_left_book: resting.is_filled(),
    }
}
