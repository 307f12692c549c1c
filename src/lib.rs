//! Business Analytics Engine for Food Truck Operations
//!
//! This crate turns raw operational records (shifts, employees, inventory
//! disposals, completed orders, menu composition, recurring expenses) into
//! decision-support numbers: labor cost, waste rate, and break-even point.
//! Every calculator is a pure function over borrowed snapshots, configured
//! by an immutable [`config::AnalyticsConfig`].

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
mod math;
pub mod models;
