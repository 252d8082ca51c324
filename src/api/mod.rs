//! HTTP API module for the compensation decision engine.
//!
//! This module provides the REST API endpoints for raise evaluation,
//! bonus calculation, status classification, and department rollups.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BonusRequest, EmployeeUpsertRequest, RaiseRequest, RollupRequest, StatusRequest,
};
pub use response::{ApiError, BonusResponse, RaiseResponse, RollupResponse, StatusResponse};
pub use state::AppState;
