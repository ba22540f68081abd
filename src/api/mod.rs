//! HTTP API module for the HR backend.
//!
//! Provides the REST endpoints for authentication, employee CRUD and
//! salary management, self-service details, and leave tracking.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, StatusResponse};
pub use state::AppState;
