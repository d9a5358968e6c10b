//! Web layer for the trotro route planner.
//!
//! Provides HTTP endpoints for searching stops, planning routes, and
//! contributing new route data.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::{AppState, Network};
