//! Inventory and ingredient models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::math;

/// A recipe ingredient referenced by menu compositions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier for the ingredient.
    pub id: String,
    /// Ingredient name, also used to match inventory items without a link.
    pub name: String,
    /// Unit of measure for recipe quantities.
    #[serde(default)]
    pub unit: String,
    /// Purchase cost per unit.
    #[serde(default)]
    pub cost_per_unit: Decimal,
}

/// A stocked inventory item with its recorded disposals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique identifier for the item.
    pub id: String,
    /// Item name.
    pub name: String,
    /// Category used for waste aggregation (e.g., "produce", "dairy").
    pub category: String,
    /// Quantity currently on hand.
    pub current_stock: Decimal,
    /// Unit of measure.
    #[serde(default)]
    pub unit: String,
    /// Purchase cost per unit.
    pub cost_per_unit: Decimal,
    /// Cumulative quantity marked as waste.
    #[serde(default)]
    pub disposed_quantity: Decimal,
    /// The ingredient this stock supplies, when linked.
    #[serde(default)]
    pub ingredient_id: Option<String>,
}

impl InventoryItem {
    /// Monetary value of the disposed quantity.
    ///
    /// Fails with `Overflow` when the product is out of range.
    ///
    /// ```
    /// use foodtruck_analytics::models::InventoryItem;
    /// use rust_decimal::Decimal;
    ///
    /// let item = InventoryItem {
    ///     id: "inv_001".to_string(),
    ///     name: "Tomatoes".to_string(),
    ///     category: "produce".to_string(),
    ///     current_stock: Decimal::ZERO,
    ///     unit: "lb".to_string(),
    ///     cost_per_unit: Decimal::new(2, 0),
    ///     disposed_quantity: Decimal::new(10, 0),
    ///     ingredient_id: None,
    /// };
    /// assert_eq!(item.waste_value().unwrap(), Decimal::new(20, 0));
    /// ```
    pub fn waste_value(&self) -> EngineResult<Decimal> {
        math::mul("waste value", self.disposed_quantity, self.cost_per_unit)
    }

    /// Rejects negative stock, cost, or disposal figures.
    pub fn validate(&self) -> EngineResult<()> {
        let checks = [
            ("current_stock", self.current_stock),
            ("cost_per_unit", self.cost_per_unit),
            ("disposed_quantity", self.disposed_quantity),
        ];

        for (field, value) in checks {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidInventoryItem {
                    item_id: self.id.clone(),
                    message: format!("{} must not be negative (got {})", field, value),
                });
            }
        }
        Ok(())
    }
}
