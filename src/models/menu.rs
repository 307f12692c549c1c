//! Menu item and recipe composition models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One ingredient line of a menu item's recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuIngredient {
    /// The ingredient consumed.
    pub ingredient_id: String,
    /// Quantity consumed per unit sold.
    pub quantity: Decimal,
    /// Unit of measure for the quantity.
    #[serde(default)]
    pub unit: String,
}

/// A sellable menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier for the menu item.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Menu category (e.g., "tacos", "drinks").
    #[serde(default)]
    pub category: String,
    /// Selling price.
    pub price: Decimal,
    /// Recipe composition.
    #[serde(default)]
    pub ingredients: Vec<MenuIngredient>,
    /// Whether the item is currently sold.
    #[serde(default = "default_available")]
    pub is_available: bool,
    /// Precomputed cost of all ingredients, if the menu collaborator has it.
    #[serde(default)]
    pub total_ingredient_cost: Option<Decimal>,
    /// Precomputed profit margin as a percentage of price.
    #[serde(default)]
    pub profit_margin: Option<Decimal>,
}

fn default_available() -> bool {
    true
}

impl MenuItem {
    /// Profit margin as a percentage of price.
    ///
    /// Uses the precomputed margin when present, otherwise derives it from
    /// price and ingredient cost. Returns `None` when neither is known, the
    /// price is not positive, or the derived figure is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use foodtruck_analytics::models::MenuItem;
    /// use rust_decimal::Decimal;
    ///
    /// let taco = MenuItem {
    ///     id: "menu_001".to_string(),
    ///     name: "Al Pastor Taco".to_string(),
    ///     category: "tacos".to_string(),
    ///     price: Decimal::new(400, 2),
    ///     ingredients: vec![],
    ///     is_available: true,
    ///     total_ingredient_cost: Some(Decimal::new(140, 2)),
    ///     profit_margin: None,
    /// };
    /// assert_eq!(taco.margin_percentage(), Some(Decimal::new(65, 0)));
    /// ```
    pub fn margin_percentage(&self) -> Option<Decimal> {
        if let Some(margin) = self.profit_margin {
            return Some(margin);
        }

        let cost = self.total_ingredient_cost?;
        if self.price <= Decimal::ZERO {
            return None;
        }
        self.price
            .checked_sub(cost)?
            .checked_div(self.price)?
            .checked_mul(Decimal::ONE_HUNDRED)
    }

    /// Rejects a negative price, ingredient cost, or recipe quantity.
    ///
    /// A negative precomputed margin is allowed: items can be sold at a loss.
    pub fn validate(&self) -> EngineResult<()> {
        if self.price < Decimal::ZERO {
            return Err(self.invalid(format!("price must not be negative (got {})", self.price)));
        }
        if let Some(cost) = self.total_ingredient_cost.filter(|c| *c < Decimal::ZERO) {
            return Err(self.invalid(format!(
                "total_ingredient_cost must not be negative (got {})",
                cost
            )));
        }
        for ingredient in &self.ingredients {
            if ingredient.quantity < Decimal::ZERO {
                return Err(self.invalid(format!(
                    "quantity of ingredient '{}' must not be negative (got {})",
                    ingredient.ingredient_id, ingredient.quantity
                )));
            }
        }
        Ok(())
    }

    fn invalid(&self, message: String) -> EngineError {
        EngineError::InvalidMenuItem {
            menu_item_id: self.id.clone(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(profit_margin: Option<Decimal>, cost: Option<Decimal>) -> MenuItem {
        MenuItem {
            id: "menu_001".to_string(),
            name: "Burrito".to_string(),
            category: "burritos".to_string(),
            price: Decimal::new(10, 0),
            ingredients: vec![],
            is_available: true,
            total_ingredient_cost: cost,
            profit_margin,
        }
    }

    #[test]
    fn test_precomputed_margin_wins() {
        let item = make_item(Some(Decimal::new(70, 0)), Some(Decimal::new(5, 0)));
        assert_eq!(item.margin_percentage(), Some(Decimal::new(70, 0)));
    }

    #[test]
    fn test_margin_derived_from_cost() {
        let item = make_item(None, Some(Decimal::new(3, 0)));
        assert_eq!(item.margin_percentage(), Some(Decimal::new(70, 0)));
    }

    #[test]
    fn test_margin_unknown_without_cost() {
        let item = make_item(None, None);
        assert_eq!(item.margin_percentage(), None);
    }

    #[test]
    fn test_margin_unknown_for_free_item() {
        let mut item = make_item(None, Some(Decimal::ONE));
        item.price = Decimal::ZERO;
        assert_eq!(item.margin_percentage(), None);
    }

    #[test]
    fn test_margin_unknown_when_out_of_range() {
        let mut item = make_item(None, Some(Decimal::MAX));
        item.price = Decimal::new(1, 20);
        assert_eq!(item.margin_percentage(), None);
    }

    #[test]
    fn test_validate_rejects_negative_recipe_quantity() {
        let mut item = make_item(None, None);
        item.ingredients.push(MenuIngredient {
            ingredient_id: "ing_tortilla".to_string(),
            quantity: Decimal::new(-2, 0),
            unit: "each".to_string(),
        });

        match item.validate() {
            Err(EngineError::InvalidMenuItem { menu_item_id, message }) => {
                assert_eq!(menu_item_id, "menu_001");
                assert!(message.contains("ing_tortilla"));
            }
            other => panic!("Expected InvalidMenuItem, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_price_and_cost() {
        let mut item = make_item(None, None);
        item.price = Decimal::new(-1, 0);
        assert!(item.validate().is_err());

        let item = make_item(None, Some(Decimal::new(-3, 0)));
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_validate_allows_negative_precomputed_margin() {
        let item = make_item(Some(Decimal::new(-15, 0)), None);
        assert!(item.validate().is_ok());
    }
}
