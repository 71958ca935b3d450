pub mod order;
pub mod trade;

pub use order::{Fill, Order, OrderId, OrderSide, OrderStatus, OrderType, MAX_ORDER_SIZE};
pub use trade::Trade;

use std::collections::HashMap;

/// Authoritative order records, keyed by id. Book sides hold only ids and
/// resolve them through this map.
pub type OrderMap = HashMap<OrderId, Order>;
