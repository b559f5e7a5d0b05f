//! Web layer for the metro network.
//!
//! Provides JSON endpoints for the route, station, intersection and
//! terminal queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
