//! Request types for the analytics API.
//!
//! Each endpoint accepts a JSON snapshot of the records it needs. Domain
//! records are embedded as-is; only the envelope is defined here.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{BreakEvenInputs, WasteTimeframe};
use crate::models::{
    Employee, Expense, FinancialSettings, Ingredient, InventoryItem, MenuItem, Order,
    ReportingPeriod, Shift,
};

/// Request body for `/labor/costs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaborCostRequest {
    /// Staff snapshot.
    pub employees: Vec<Employee>,
    /// Shifts to cost.
    pub shifts: Vec<Shift>,
    /// The inclusive reporting period.
    pub period: ReportingPeriod,
}

/// Request body for `/labor/efficiency`.
///
/// Labor is costed from the shifts first; sales figures should cover one
/// week, matching the summary's weekly averages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaborEfficiencyRequest {
    /// Staff snapshot.
    pub employees: Vec<Employee>,
    /// Shifts to cost.
    pub shifts: Vec<Shift>,
    /// The inclusive reporting period.
    pub period: ReportingPeriod,
    /// Weekly revenue.
    pub total_revenue: Decimal,
    /// Weekly order count.
    pub total_orders: Decimal,
    /// Weekly sales.
    pub total_sales: Decimal,
}

/// Request body for `/labor/projection`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaborProjectionRequest {
    /// Staff snapshot used for the average wage.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Planned weekly hours.
    pub projected_weekly_hours: Decimal,
    /// Expected weekly revenue.
    pub projected_revenue: Decimal,
    /// Target labor cost percentage; the configured target when absent.
    #[serde(default)]
    pub target_labor_percentage: Option<Decimal>,
}

/// Request body for `/waste`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteRequest {
    /// Stock with recorded disposals.
    pub inventory_items: Vec<InventoryItem>,
    /// Orders of any status.
    #[serde(default)]
    pub orders: Vec<Order>,
    /// Recipe compositions.
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    /// Ingredient list for names and matching.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Sales window.
    pub timeframe: WasteTimeframe,
    /// End of the sales window.
    pub as_of: NaiveDateTime,
}

/// Request body for `/break-even`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakEvenRequest {
    /// Expense ledger.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Monthly labor cost.
    pub labor_monthly_cost: Decimal,
    /// Monthly waste cost to include.
    #[serde(default)]
    pub waste_monthly_cost: Option<Decimal>,
    /// Orders used for the average order value.
    #[serde(default)]
    pub orders: Vec<Order>,
    /// Menu used for the average margin.
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    /// Owner overrides and multipliers.
    #[serde(default)]
    pub settings: FinancialSettings,
    /// Weekdays the truck operates.
    #[serde(default)]
    pub operating_days: Vec<Weekday>,
    /// Date that selects the season.
    pub as_of: NaiveDate,
}

impl BreakEvenRequest {
    /// Borrows the request as calculator inputs.
    pub fn inputs(&self) -> BreakEvenInputs<'_> {
        BreakEvenInputs {
            expenses: &self.expenses,
            labor_monthly_cost: self.labor_monthly_cost,
            waste_monthly_cost: self.waste_monthly_cost,
            orders: &self.orders,
            menu_items: &self.menu_items,
            settings: &self.settings,
            operating_days: &self.operating_days,
            as_of: self.as_of,
        }
    }
}

/// Request body for `/expenses/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseSummaryRequest {
    /// Expense ledger.
    pub expenses: Vec<Expense>,
}

/// Request body for `/insights`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsRequest {
    /// Expense ledger.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Orders of any status.
    #[serde(default)]
    pub orders: Vec<Order>,
    /// Monthly labor cost.
    pub labor_monthly_cost: Decimal,
    /// Monthly waste cost.
    #[serde(default)]
    pub waste_monthly_cost: Option<Decimal>,
    /// The inclusive reporting period.
    pub period: ReportingPeriod,
}
