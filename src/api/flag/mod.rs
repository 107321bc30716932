//! Flag page and component swap endpoints

pub mod page;
pub mod swap;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;
use super::types::not_found;
use crate::render::SWAP_ENDPOINT;

/// Create flag router
pub fn create_flag_router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::show_page).fallback(not_found))
        .route(
            SWAP_ENDPOINT,
            post(swap::swap_component).fallback(not_found),
        )
}
