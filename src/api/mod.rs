//! HTTP API module for the Tax Engine.
//!
//! This module provides the REST API endpoints for calculating Personal
//! Income Tax and Company Income Tax.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CitRequest, FlagValue, PitRequest, MAX_DECLARED_AMOUNT};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
