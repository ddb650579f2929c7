//! Order vocabulary: sides, client order IDs, and live-order snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{Price, Size};

/// Order side: buy (bid) or sell (ask).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Returns the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Returns 1 for buy, -1 for sell (for inventory arithmetic).
    pub fn sign(&self) -> i8 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Client order ID for idempotent submissions.
///
/// Every submission carries a unique cloid so a retried batch can never
/// double-place an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientOrderId(String);

impl ClientOrderId {
    /// Create a new unique client order ID.
    ///
    /// Format: `mmq_{uuid}`.
    pub fn new() -> Self {
        Self(format!("mmq_{}", Uuid::new_v4().simple()))
    }

    /// Create from an existing string (for parsing venue responses).
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClientOrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ClientOrderId {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

/// A resting order as reported by the venue.
///
/// Read-only reference into venue state: refreshed every tick, never
/// cached across ticks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveOrder {
    /// Venue order ID.
    pub oid: u64,
    /// Client order ID, when the venue echoes it back.
    pub cloid: Option<ClientOrderId>,
    /// Side the order rests on.
    pub side: OrderSide,
    /// Resting limit price.
    pub price: Price,
    /// Remaining (unfilled) size.
    pub remaining: Size,
}

impl LiveOrder {
    pub fn new(oid: u64, side: OrderSide, price: Price, remaining: Size) -> Self {
        Self {
            oid,
            cloid: None,
            side,
            price,
            remaining,
        }
    }
}
