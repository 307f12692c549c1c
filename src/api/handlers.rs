//! HTTP request handlers for the analytics API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! endpoint is a `POST` that takes a JSON snapshot and returns the computed
//! result; nothing is stored between requests.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_break_even, calculate_financial_insights, calculate_labor_costs,
    calculate_labor_efficiency, calculate_waste_analytics, project_labor_costs,
    summarize_expenses,
};
use crate::error::EngineResult;

use super::request::{
    BreakEvenRequest, ExpenseSummaryRequest, InsightsRequest, LaborCostRequest,
    LaborEfficiencyRequest, LaborProjectionRequest, WasteRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/labor/costs", post(labor_costs_handler))
        .route("/labor/efficiency", post(labor_efficiency_handler))
        .route("/labor/projection", post(labor_projection_handler))
        .route("/waste", post(waste_handler))
        .route("/break-even", post(break_even_handler))
        .route("/expenses/summary", post(expense_summary_handler))
        .route("/insights", post(insights_handler))
        .with_state(state)
}

/// Handler for POST /labor/costs.
async fn labor_costs_handler(
    State(state): State<AppState>,
    payload: Result<Json<LaborCostRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing labor cost request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = calculate_labor_costs(
        &request.employees,
        &request.shifts,
        &request.period,
        &state.config().labor,
    );
    respond(correlation_id, "labor_costs", start_time, result)
}

/// Handler for POST /labor/efficiency.
///
/// Costs the shifts first, then relates the weekly figures to sales.
async fn labor_efficiency_handler(
    State(state): State<AppState>,
    payload: Result<Json<LaborEfficiencyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing labor efficiency request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = calculate_labor_costs(
        &request.employees,
        &request.shifts,
        &request.period,
        &state.config().labor,
    )
    .and_then(|summary| {
        calculate_labor_efficiency(
            &summary,
            request.total_revenue,
            request.total_orders,
            request.total_sales,
        )
    });
    respond(correlation_id, "labor_efficiency", start_time, result)
}

/// Handler for POST /labor/projection.
async fn labor_projection_handler(
    State(state): State<AppState>,
    payload: Result<Json<LaborProjectionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing labor projection request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = project_labor_costs(
        &request.employees,
        request.projected_weekly_hours,
        request.projected_revenue,
        request.target_labor_percentage,
        &state.config().labor,
    );
    respond(correlation_id, "labor_projection", start_time, result)
}

/// Handler for POST /waste.
async fn waste_handler(
    State(state): State<AppState>,
    payload: Result<Json<WasteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing waste analytics request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = calculate_waste_analytics(
        &request.inventory_items,
        &request.orders,
        &request.menu_items,
        &request.ingredients,
        request.timeframe,
        request.as_of,
        state.config(),
    );
    respond(correlation_id, "waste", start_time, result)
}

/// Handler for POST /break-even.
async fn break_even_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakEvenRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing break-even request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = calculate_break_even(&request.inputs(), state.config());
    respond(correlation_id, "break_even", start_time, result)
}

/// Handler for POST /expenses/summary.
async fn expense_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExpenseSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing expense summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = summarize_expenses(&request.expenses, &state.config().expenses);
    respond(correlation_id, "expense_summary", start_time, result)
}

/// Handler for POST /insights.
async fn insights_handler(
    State(state): State<AppState>,
    payload: Result<Json<InsightsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing financial insights request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let rates = &state.config().expenses;
    let result = summarize_expenses(&request.expenses, rates).and_then(|summary| {
        calculate_financial_insights(
            &summary,
            &request.orders,
            request.labor_monthly_cost,
            request.waste_monthly_cost,
            &request.period,
            rates,
        )
    });
    respond(correlation_id, "insights", start_time, result)
}

/// Turns a calculator result into a JSON response.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    endpoint: &'static str,
    start_time: Instant,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                endpoint,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                endpoint,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}
