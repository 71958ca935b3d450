use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Largest requested size admitted; keeps aggregate level volume far from
/// the `Decimal` range
pub const MAX_ORDER_SIZE: Decimal = Decimal::from_parts(2_808_348_672, 232_830_643, 0, false, 0);

/// Unique identifier of an order, assigned at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn new() -> Self {
        OrderId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderType {
    #[default]
    Market,
    Limit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderSide {
    #[default]
    Buy,
    Sell,
}

impl OrderSide {
    pub fn opposite(self) -> OrderSide {
        match self {
            OrderSide::Buy => OrderSide::Sell,
            OrderSide::Sell => OrderSide::Buy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Unfilled,
    PartiallyFilled,
    Filled,
}

/// One execution applied to an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub quantity: Decimal,
    pub price: Decimal,
    pub counterparty: OrderId,
}

/// Lifecycle record of a single order.
///
/// Identity fields never change after construction. Only `update` touches the
/// fill state, and it keeps `size == residual_size + sum(fills)` at all times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    ticker: String,
    order_type: OrderType,
    side: OrderSide,
    size: Decimal,
    price: Option<Decimal>,
    residual_size: Decimal,
    status: OrderStatus,
    avg_fill_price: Decimal,
    fills: Vec<Fill>,
    error: bool,
}

impl Order {
    /// Builds an order without checking it. Admission checks happen in
    /// `Exchange::submit_order`; use `Order::validated` to check up front.
    pub fn new(
        ticker: impl Into<String>,
        order_type: OrderType,
        side: OrderSide,
        size: Decimal,
        price: Option<Decimal>,
    ) -> Self {
        let ticker = ticker.into();
        let price = match (order_type, price) {
            (OrderType::Market, Some(ignored)) => {
                log::warn!(
                    "market order on {} carries price {}, ignoring it",
                    ticker,
                    ignored
                );
                None
            }
            (_, price) => price,
        };
        Self {
            id: OrderId::new(),
            ticker,
            order_type,
            side,
            size,
            price,
            residual_size: size,
            status: OrderStatus::Unfilled,
            avg_fill_price: Decimal::ZERO,
            fills: Vec::new(),
            error: false,
        }
    }

    pub fn validated(
        ticker: impl Into<String>,
        order_type: OrderType,
        side: OrderSide,
        size: Decimal,
        price: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let order = Self::new(ticker, order_type, side, size, price);
        order.validate()?;
        Ok(order)
    }

    pub fn limit(ticker: impl Into<String>, side: OrderSide, size: Decimal, price: Decimal) -> Self {
        Self::new(ticker, OrderType::Limit, side, size, Some(price))
    }

    pub fn market(ticker: impl Into<String>, side: OrderSide, size: Decimal) -> Self {
        Self::new(ticker, OrderType::Market, side, size, None)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.size <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveSize(self.size));
        }
        if !self.size.fract().is_zero() {
            return Err(ValidationError::FractionalSize(self.size));
        }
        if self.size > MAX_ORDER_SIZE {
            return Err(ValidationError::SizeTooLarge(self.size));
        }
        if self.order_type == OrderType::Limit {
            match self.price {
                None => return Err(ValidationError::MissingPrice),
                Some(price) if price <= Decimal::ZERO => {
                    return Err(ValidationError::NonPositivePrice(price))
                }
                Some(_) => {}
            }
        }
        if !self.is_fresh() {
            return Err(ValidationError::AlreadyExecuted(self.id));
        }
        Ok(())
    }

    /// True while no matching routine has touched the order
    fn is_fresh(&self) -> bool {
        self.fills.is_empty()
            && self.residual_size == self.size
            && self.status == OrderStatus::Unfilled
            && self.avg_fill_price.is_zero()
            && !self.error
    }

    /// Applies one fill and returns the quantity actually applied, which is
    /// `filled_qty` clamped to the residual size.
    pub(crate) fn update(
        &mut self,
        filled_qty: Decimal,
        execution_price: Decimal,
        counterparty: OrderId,
    ) -> Decimal {
        assert!(
            filled_qty >= Decimal::ZERO,
            "negative fill {} applied to order {}",
            filled_qty,
            self.id
        );
        let quantity = filled_qty.min(self.residual_size);
        if quantity.is_zero() {
            return quantity;
        }

        self.avg_fill_price = weighted_average(
            self.avg_fill_price,
            self.filled_size(),
            execution_price,
            quantity,
        );
        self.residual_size -= quantity;
        self.fills.push(Fill {
            quantity,
            price: execution_price,
            counterparty,
        });
        self.status = self.derive_status();
        quantity
    }

    fn derive_status(&self) -> OrderStatus {
        if self.fills.is_empty() {
            OrderStatus::Unfilled
        } else if self.residual_size.is_zero() {
            OrderStatus::Filled
        } else {
            OrderStatus::PartiallyFilled
        }
    }

    pub(crate) fn mark_rejected(&mut self) {
        self.error = true;
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn size(&self) -> Decimal {
        self.size
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    pub fn residual_size(&self) -> Decimal {
        self.residual_size
    }

    pub fn filled_size(&self) -> Decimal {
        self.size - self.residual_size
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn avg_fill_price(&self) -> Decimal {
        self.avg_fill_price
    }

    pub fn matches(&self) -> &[Fill] {
        &self.fills
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn is_filled(&self) -> bool {
        self.status == OrderStatus::Filled
    }
}

/// Size-weighted average of the fills so far and a new fill. Falls back to
/// the incremental form when the notional leaves the `Decimal` range.
fn weighted_average(avg: Decimal, filled: Decimal, price: Decimal, quantity: Decimal) -> Decimal {
    let total = filled + quantity;
    avg.checked_mul(filled)
        .zip(price.checked_mul(quantity))
        .and_then(|(old, new)| old.checked_add(new))
        .and_then(|notional| notional.checked_div(total))
        .unwrap_or_else(|| avg + (price - avg) * (quantity / total))
}
