//! Waste analytics functionality.
//!
//! This module reconciles the ingredient consumption implied by completed
//! sales ("theoretical usage") against the quantities staff physically
//! disposed of, producing a waste rate and waste value per inventory item,
//! category totals, a monthly projection, and ranked reduction
//! recommendations.
//!
//! ## Waste Rate
//!
//! ```text
//! actual_usage = theoretical + disposed             when theoretical > 0
//!              = max(disposed, stock + disposed)    otherwise (no sales signal)
//! waste_rate   = disposed / actual_usage × 100      clamped to [0, 100]
//! ```
//!
//! With no usage at all the rate is 100% if anything was disposed and 0%
//! otherwise.

use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, Months, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{AnalyticsConfig, WastePolicy};
use crate::error::EngineResult;
use crate::math;
use crate::models::{Ingredient, InventoryItem, MenuItem, Order};

/// Name given to ingredients referenced by a recipe but missing from the
/// ingredient list.
pub const UNKNOWN_INGREDIENT_NAME: &str = "Unknown";

/// The sales window waste is measured over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteTimeframe {
    /// The last 7 days.
    Week,
    /// The last calendar month.
    Month,
    /// The last 3 calendar months.
    Quarter,
}

impl WasteTimeframe {
    /// First instant of the window ending at `as_of`.
    pub fn window_start(self, as_of: NaiveDateTime) -> NaiveDateTime {
        let start = match self {
            WasteTimeframe::Week => as_of.checked_sub_signed(Duration::days(7)),
            WasteTimeframe::Month => as_of.checked_sub_months(Months::new(1)),
            WasteTimeframe::Quarter => as_of.checked_sub_months(Months::new(3)),
        };
        start.unwrap_or(NaiveDateTime::MIN)
    }

    /// Converts a total for this window into a per-month figure.
    ///
    /// Fails with `Overflow` when the scaled total is out of range.
    ///
    /// ```
    /// use foodtruck_analytics::calculation::WasteTimeframe;
    /// use rust_decimal::Decimal;
    ///
    /// let weeks_per_month = Decimal::new(433, 2);
    /// assert_eq!(WasteTimeframe::Quarter.to_monthly(Decimal::new(300, 0), weeks_per_month).unwrap(), Decimal::new(100, 0));
    /// assert_eq!(WasteTimeframe::Week.to_monthly(Decimal::new(100, 0), weeks_per_month).unwrap(), Decimal::new(433, 0));
    /// ```
    pub fn to_monthly(self, total: Decimal, weeks_per_month: Decimal) -> EngineResult<Decimal> {
        match self {
            WasteTimeframe::Week => math::mul("monthly waste", total, weeks_per_month),
            WasteTimeframe::Month => Ok(total),
            WasteTimeframe::Quarter => math::div("monthly waste", total, Decimal::from(3)),
        }
    }
}

/// Advisory band for a waste rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteTier {
    /// Above the high-waste threshold.
    High,
    /// Above the moderate threshold.
    Moderate,
    /// Above the normal threshold.
    Normal,
    /// At or below the normal threshold.
    Excellent,
}

impl WasteTier {
    /// Classifies a waste rate percentage.
    pub fn for_rate(rate: Decimal, policy: &WastePolicy) -> Self {
        if rate > policy.high_waste_rate {
            WasteTier::High
        } else if rate > policy.moderate_waste_rate {
            WasteTier::Moderate
        } else if rate > policy.normal_waste_rate {
            WasteTier::Normal
        } else {
            WasteTier::Excellent
        }
    }

    /// Advice shown next to the item.
    pub fn advice(self) -> &'static str {
        match self {
            WasteTier::High => "High waste: reduce order quantities or improve storage",
            WasteTier::Moderate => "Moderate waste: monitor usage and adjust ordering",
            WasteTier::Normal => "Normal waste for this item",
            WasteTier::Excellent => "Excellent: use as a benchmark for other items",
        }
    }
}

/// Theoretical consumption of one ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientUsage {
    /// The ingredient.
    pub ingredient_id: String,
    /// Ingredient name, or "Unknown" when it is not in the ingredient list.
    pub name: String,
    /// Quantity implied by completed sales in the window.
    pub theoretical_usage: Decimal,
}

/// Waste figures for one inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteRateItem {
    /// The inventory item.
    pub item_id: String,
    /// Item name.
    pub name: String,
    /// Item category.
    pub category: String,
    /// Unit of measure.
    pub unit: String,
    /// The ingredient the item was matched to, if any.
    pub ingredient_id: Option<String>,
    /// Consumption implied by sales.
    pub theoretical_usage: Decimal,
    /// Quantity marked as waste.
    pub disposed_quantity: Decimal,
    /// Usage including waste, or the stock-based estimate.
    pub actual_usage: Decimal,
    /// Disposed share of actual usage, in percent.
    pub waste_rate: Decimal,
    /// Monetary value of the disposed quantity.
    pub waste_value: Decimal,
    /// Advisory band.
    pub tier: WasteTier,
    /// Advice for the band.
    pub advice: String,
}

/// What a recommendation asks the operator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Order less of an item.
    ReduceOrder,
    /// Store an item better.
    ImproveStorage,
    /// Rework the menu around a category.
    MenuOptimization,
}

/// Recommendation urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    /// Act now.
    High,
    /// Act soon.
    Medium,
}

/// A ranked waste reduction recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteRecommendation {
    /// What kind of action is recommended.
    pub kind: RecommendationKind,
    /// Inventory item ID, or category name for menu optimizations.
    pub target: String,
    /// Short headline.
    pub title: String,
    /// Explanation including the figures behind it.
    pub description: String,
    /// Expected monthly-window savings if acted on.
    pub potential_savings: Decimal,
    /// Urgency.
    pub priority: RecommendationPriority,
}

/// The result of a waste analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteAnalytics {
    /// The window analyzed.
    pub timeframe: WasteTimeframe,
    /// First instant of the window.
    pub window_start: NaiveDateTime,
    /// End of the window.
    pub as_of: NaiveDateTime,
    /// Completed orders that fell in the window.
    pub completed_orders: usize,
    /// Theoretical usage per ingredient, ordered by ingredient ID.
    pub ingredient_usage: Vec<IngredientUsage>,
    /// Items with usage or disposals, highest waste value first.
    pub items: Vec<WasteRateItem>,
    /// Sum of item waste values.
    pub total_waste_value: Decimal,
    /// Waste value per category.
    pub waste_by_category: BTreeMap<String, Decimal>,
    /// Mean waste rate across reported items.
    pub average_waste_percentage: Decimal,
    /// `100 - average_waste_percentage`.
    pub waste_efficiency_rate: Decimal,
    /// Waste value expressed per month.
    pub monthly_waste_expense: Decimal,
    /// Monthly waste × 12.
    pub projected_annual_waste: Decimal,
    /// Ranked recommendations.
    pub recommendations: Vec<WasteRecommendation>,
    /// Sum of recommendation savings.
    pub total_potential_savings: Decimal,
}

/// Sums ingredient consumption implied by completed orders placed between
/// `window_start` and `as_of`, both inclusive.
///
/// Returns the usage map and the number of orders counted. Lines for menu
/// items that don't exist contribute nothing.
pub fn theoretical_usage(
    orders: &[Order],
    menu_items: &[MenuItem],
    window_start: NaiveDateTime,
    as_of: NaiveDateTime,
) -> EngineResult<(BTreeMap<String, Decimal>, usize)> {
    let menu_by_id: HashMap<&str, &MenuItem> =
        menu_items.iter().map(|m| (m.id.as_str(), m)).collect();

    let mut usage: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut counted = 0;

    for order in orders.iter().filter(|o| {
        o.is_completed() && o.order_time >= window_start && o.order_time <= as_of
    }) {
        counted += 1;
        for line in &order.items {
            let Some(menu_item) = menu_by_id.get(line.menu_item_id.as_str()) else {
                debug!(
                    order_id = %order.id,
                    menu_item_id = %line.menu_item_id,
                    "Order line references unknown menu item"
                );
                continue;
            };
            for ingredient in &menu_item.ingredients {
                let consumed =
                    math::mul("theoretical usage", line.quantity, ingredient.quantity)?;
                let total = usage
                    .entry(ingredient.ingredient_id.clone())
                    .or_insert(Decimal::ZERO);
                *total = math::add("theoretical usage", *total, consumed)?;
            }
        }
    }

    Ok((usage, counted))
}

/// Computes `(actual_usage, waste_rate)` for an item.
///
/// # Examples
///
/// ```
/// use foodtruck_analytics::calculation::waste_rate;
/// use rust_decimal::Decimal;
///
/// // No sales signal, nothing left in stock: everything bought was wasted
/// let (actual, rate) = waste_rate(Decimal::ZERO, Decimal::new(10, 0), Decimal::ZERO).unwrap();
/// assert_eq!(actual, Decimal::new(10, 0));
/// assert_eq!(rate, Decimal::ONE_HUNDRED);
/// ```
pub fn waste_rate(
    theoretical_usage: Decimal,
    disposed_quantity: Decimal,
    current_stock: Decimal,
) -> EngineResult<(Decimal, Decimal)> {
    let actual_usage = if theoretical_usage > Decimal::ZERO {
        math::add("actual usage", theoretical_usage, disposed_quantity)?
    } else {
        disposed_quantity.max(math::add("actual usage", current_stock, disposed_quantity)?)
    };

    let rate = if actual_usage > Decimal::ZERO {
        let share = math::div("waste rate", disposed_quantity, actual_usage)?;
        math::mul("waste rate", share, Decimal::ONE_HUNDRED)?
    } else if disposed_quantity > Decimal::ZERO {
        Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    Ok((actual_usage, rate.max(Decimal::ZERO).min(Decimal::ONE_HUNDRED)))
}

/// Calculates waste analytics for a sales window.
///
/// # Arguments
///
/// * `inventory_items` - Stock with cumulative disposals
/// * `orders` - Orders of any status; only completed orders in the window count
/// * `menu_items` - Recipe compositions
/// * `ingredients` - Ingredient list for names and name-based matching
/// * `timeframe` - The sales window
/// * `as_of` - End of the window
/// * `config` - Waste policy and month conversion constants
///
/// # Returns
///
/// [`WasteAnalytics`], or an error if an inventory item has negative stock,
/// cost, or disposal figures (`InvalidInventoryItem`), an order has a
/// negative total or line quantity (`InvalidOrder`), a recipe has a negative
/// quantity (`InvalidMenuItem`), or a figure overflows (`Overflow`).
pub fn calculate_waste_analytics(
    inventory_items: &[InventoryItem],
    orders: &[Order],
    menu_items: &[MenuItem],
    ingredients: &[Ingredient],
    timeframe: WasteTimeframe,
    as_of: NaiveDateTime,
    config: &AnalyticsConfig,
) -> EngineResult<WasteAnalytics> {
    for item in inventory_items {
        item.validate()?;
    }
    for order in orders {
        order.validate()?;
    }
    for menu_item in menu_items {
        menu_item.validate()?;
    }
    let policy = &config.waste;

    let window_start = timeframe.window_start(as_of);
    let (usage, completed_orders) = theoretical_usage(orders, menu_items, window_start, as_of)?;

    let ingredient_names: HashMap<&str, &str> = ingredients
        .iter()
        .map(|i| (i.id.as_str(), i.name.as_str()))
        .collect();
    let ingredient_by_name: HashMap<String, &str> = ingredients
        .iter()
        .map(|i| (normalize_name(&i.name), i.id.as_str()))
        .collect();

    let ingredient_usage = usage
        .iter()
        .map(|(id, quantity)| IngredientUsage {
            ingredient_id: id.clone(),
            name: ingredient_names
                .get(id.as_str())
                .map(|n| n.to_string())
                .unwrap_or_else(|| UNKNOWN_INGREDIENT_NAME.to_string()),
            theoretical_usage: *quantity,
        })
        .collect();

    let mut items: Vec<WasteRateItem> = Vec::new();
    for item in inventory_items {
        let ingredient_id = item
            .ingredient_id
            .clone()
            .or_else(|| {
                ingredient_by_name
                    .get(&normalize_name(&item.name))
                    .map(|id| id.to_string())
            });
        let theoretical = ingredient_id
            .as_ref()
            .and_then(|id| usage.get(id))
            .copied()
            .unwrap_or(Decimal::ZERO);

        if theoretical.is_zero() && item.disposed_quantity.is_zero() {
            continue;
        }

        let (actual_usage, rate) =
            waste_rate(theoretical, item.disposed_quantity, item.current_stock)?;
        let tier = WasteTier::for_rate(rate, policy);

        items.push(WasteRateItem {
            item_id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            unit: item.unit.clone(),
            ingredient_id,
            theoretical_usage: theoretical,
            disposed_quantity: item.disposed_quantity,
            actual_usage,
            waste_rate: rate,
            waste_value: item.waste_value()?,
            tier,
            advice: tier.advice().to_string(),
        });
    }
    items.sort_by(|a, b| {
        b.waste_value
            .cmp(&a.waste_value)
            .then_with(|| a.item_id.cmp(&b.item_id))
    });

    let total_waste_value = math::sum("total waste value", items.iter().map(|i| i.waste_value))?;
    let mut waste_by_category: BTreeMap<String, Decimal> = BTreeMap::new();
    for item in &items {
        let total = waste_by_category
            .entry(item.category.clone())
            .or_insert(Decimal::ZERO);
        *total = math::add("category waste", *total, item.waste_value)?;
    }

    let average_waste_percentage =
        math::mean("average waste rate", items.iter().map(|i| i.waste_rate))?
            .unwrap_or(Decimal::ZERO);

    let monthly_waste_expense =
        timeframe.to_monthly(total_waste_value, config.expenses.weeks_per_month)?;
    let projected_annual_waste =
        math::mul("annual waste", monthly_waste_expense, Decimal::from(12))?;

    let recommendations = build_recommendations(&items, &waste_by_category, policy)?;
    let total_potential_savings = math::sum(
        "potential savings",
        recommendations.iter().map(|r| r.potential_savings),
    )?;

    debug!(
        items = items.len(),
        completed_orders,
        total_waste_value = %total_waste_value,
        recommendations = recommendations.len(),
        "Calculated waste analytics"
    );

    Ok(WasteAnalytics {
        timeframe,
        window_start,
        as_of,
        completed_orders,
        ingredient_usage,
        items,
        total_waste_value,
        waste_by_category,
        average_waste_percentage,
        waste_efficiency_rate: Decimal::ONE_HUNDRED - average_waste_percentage,
        monthly_waste_expense,
        projected_annual_waste,
        recommendations,
        total_potential_savings,
    })
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Ranks recommendations. `items` must already be ordered by waste value
/// descending.
fn build_recommendations(
    items: &[WasteRateItem],
    waste_by_category: &BTreeMap<String, Decimal>,
    policy: &WastePolicy,
) -> EngineResult<Vec<WasteRecommendation>> {
    let mut recommendations = Vec::new();

    for item in items
        .iter()
        .filter(|i| i.waste_rate > policy.reduce_order_rate)
        .take(policy.reduce_order_limit)
    {
        let priority = if item.waste_rate > policy.reduce_order_high_priority_rate {
            RecommendationPriority::High
        } else {
            RecommendationPriority::Medium
        };
        recommendations.push(WasteRecommendation {
            kind: RecommendationKind::ReduceOrder,
            target: item.item_id.clone(),
            title: format!("Reduce order quantity for {}", item.name),
            description: format!(
                "{} has a {}% waste rate (${} wasted). Order smaller quantities more often.",
                item.name,
                item.waste_rate.round_dp(1).normalize(),
                item.waste_value.round_dp(2)
            ),
            potential_savings: math::mul(
                "potential savings",
                item.waste_value,
                policy.reduce_order_savings_rate,
            )?,
            priority,
        });
    }

    for item in items
        .iter()
        .filter(|i| i.waste_value > policy.improve_storage_value)
        .take(policy.improve_storage_limit)
    {
        recommendations.push(WasteRecommendation {
            kind: RecommendationKind::ImproveStorage,
            target: item.item_id.clone(),
            title: format!("Improve storage for {}", item.name),
            description: format!(
                "${} of {} was disposed. Review storage temperature, rotation, and shelf life.",
                item.waste_value.round_dp(2),
                item.name
            ),
            potential_savings: math::mul(
                "potential savings",
                item.waste_value,
                policy.improve_storage_savings_rate,
            )?,
            priority: RecommendationPriority::High,
        });
    }

    let mut categories: Vec<(&String, &Decimal)> = waste_by_category
        .iter()
        .filter(|(_, value)| **value > policy.menu_optimization_value)
        .collect();
    categories.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for (category, value) in categories.into_iter().take(policy.menu_optimization_limit) {
        recommendations.push(WasteRecommendation {
            kind: RecommendationKind::MenuOptimization,
            target: category.clone(),
            title: format!("Optimize menu items using {}", category),
            description: format!(
                "The {} category accounts for ${} of waste. Feature dishes that share these ingredients or trim slow sellers.",
                category,
                value.round_dp(2)
            ),
            potential_savings: math::mul(
                "potential savings",
                *value,
                policy.menu_optimization_savings_rate,
            )?,
            priority: RecommendationPriority::Medium,
        });
    }

    Ok(recommendations)
}
