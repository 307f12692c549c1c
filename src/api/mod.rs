//! HTTP API module for the analytics engine.
//!
//! This module exposes each calculator as a JSON endpoint so the dashboard
//! can request figures without linking the crate.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BreakEvenRequest, ExpenseSummaryRequest, InsightsRequest, LaborCostRequest,
    LaborEfficiencyRequest, LaborProjectionRequest, WasteRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
