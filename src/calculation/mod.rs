//! Calculation logic for the analytics engine.
//!
//! This module contains the pure calculators that turn operational records
//! into decision-support figures: expense normalization to a monthly basis,
//! labor costing with a weekly overtime threshold, labor efficiency and
//! projections, waste analytics with reduction recommendations, break-even
//! order counts, and period financial insights.

mod break_even;
mod expense;
mod insights;
mod labor_cost;
mod labor_efficiency;
mod labor_projection;
mod waste;

pub use break_even::{
    BreakEvenAnalysis, BreakEvenInputs, DailyBreakEven, MonthlyExpenseBreakdown,
    average_order_value, average_profit_margin, calculate_break_even,
};
pub use expense::{
    ExpenseSummary, expense_monthly_equivalent, monthly_equivalent, summarize_expenses,
    total_monthly_expenses,
};
pub use insights::{FinancialInsights, calculate_financial_insights};
pub use labor_cost::{
    EmployeeLaborCost, LaborCostSummary, PositionLaborCost, ShiftLaborCost,
    calculate_labor_costs, split_weekly_overtime,
};
pub use labor_efficiency::{LaborEfficiencyMetrics, calculate_labor_efficiency};
pub use labor_projection::{LaborProjection, project_labor_costs};
pub use waste::{
    IngredientUsage, RecommendationKind, RecommendationPriority, UNKNOWN_INGREDIENT_NAME,
    WasteAnalytics, WasteRateItem, WasteRecommendation, WasteTier, WasteTimeframe,
    calculate_waste_analytics, theoretical_usage, waste_rate,
};
