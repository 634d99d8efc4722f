//! Tax Engine for the Nigeria Tax Act, 2025
//!
//! This crate computes Personal Income Tax (progressive bands after capped
//! deductions) and Company Income Tax (small company exemption, or a flat
//! rate plus the development levy) from declared financial inputs.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
