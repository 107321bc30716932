//! Component swap handler

use axum::{extract::State, response::Html};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, SwapRequest};
use crate::domain::flag::single_selection;
use crate::domain::{ComponentSettings, DomainError};
use crate::render;

/// POST /swapComponent.svg
pub async fn swap_component(
    State(state): State<AppState>,
    request: SwapRequest,
) -> Result<Html<String>, ApiError> {
    let settings = request
        .components
        .iter()
        .map(|raw| ComponentSettings::from_json(raw))
        .collect::<Result<Vec<_>, DomainError>>()?;
    let selected = single_selection(request.selected)?;

    debug!(selected = %selected, components = settings.len(), "Swapping component");

    let flag = state
        .generator
        .swap(settings, &selected, &mut rand::thread_rng())?;

    Ok(Html(render::flag_svg(&flag)))
}
