//! # cloudbox-api
//!
//! HTTP API layer for Cloudbox built on Axum.
//!
//! Exposes upload authorization, upload registration, folder creation and
//! entry management under `/api`, with request logging, CORS and error
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
