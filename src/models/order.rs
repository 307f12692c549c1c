//! Order models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Received, not started.
    Pending,
    /// Being prepared.
    Preparing,
    /// Ready for pickup.
    Ready,
    /// Handed to the customer and paid.
    Completed,
    /// Cancelled before completion.
    Cancelled,
    /// Refunded after completion.
    Refunded,
}

/// A single line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// The menu item sold.
    pub menu_item_id: String,
    /// Units sold.
    pub quantity: Decimal,
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier for the order.
    pub id: String,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// When the order was placed.
    pub order_time: NaiveDateTime,
    /// Order total charged to the customer.
    #[serde(default)]
    pub total: Decimal,
    /// Lines of the order.
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Returns true if the order counts toward realized sales.
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    /// Rejects a negative total or a negative line quantity.
    ///
    /// Every order is checked, whatever its status, so a bad record is
    /// reported even when it would not have been counted.
    pub fn validate(&self) -> EngineResult<()> {
        if self.total < Decimal::ZERO {
            return Err(self.invalid(format!("total must not be negative (got {})", self.total)));
        }
        for line in &self.items {
            if line.quantity < Decimal::ZERO {
                return Err(self.invalid(format!(
                    "quantity for menu item '{}' must not be negative (got {})",
                    line.menu_item_id, line.quantity
                )));
            }
        }
        Ok(())
    }

    fn invalid(&self, message: String) -> EngineError {
        EngineError::InvalidOrder {
            order_id: self.id.clone(),
            message,
        }
    }
}
