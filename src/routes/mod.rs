//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /             - Collections index page
//! POST /collections  - Write actions (create/delete), dispatched by actionType
//! GET  /extras       - Static secondary page
//! ```

pub mod collections;
pub mod extras;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(collections::index))
        .route("/collections", post(collections::action))
        .route("/extras", get(extras::index))
}
