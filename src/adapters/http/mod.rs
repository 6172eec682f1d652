//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own module with DTOs, handlers and routes;
//! [`build_app_router`] mounts them under `/api` behind the shared middleware.

pub mod calendar;
pub mod closet;
pub mod error;
pub mod lookbook;
pub mod moodboard;
pub mod persona;
pub mod router;
pub mod state;
pub mod today;

pub use error::ErrorResponse;
pub use router::{api_routes, build_app_router, build_cors_layer};
pub use state::AppState;
