//! Page handler

use axum::{extract::State, response::Html};
use tracing::debug;

use crate::api::state::AppState;
use crate::render;

/// GET /
pub async fn show_page(State(state): State<AppState>) -> Html<String> {
    let flag = state.generator.generate(&mut rand::thread_rng());
    debug!(components = ?flag.component_ids(), "Rendering page");

    let body = render::page_body(&state.intro_html, &render::flag_svg(&flag));

    Html(render::page(&state.site.title, &body, &state.site.htmx_src))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::SiteConfig;
    use crate::domain::{FlagDimensions, FlagGenerator};

    fn test_state() -> AppState {
        AppState {
            generator: Arc::new(FlagGenerator::new(FlagDimensions::new(342, 180), 2..4)),
            site: Arc::new(SiteConfig::default()),
            intro_html: Arc::from("<p>Intro</p>"),
        }
    }

    #[tokio::test]
    async fn test_show_page() {
        let Html(html) = show_page(State(test_state())).await;

        assert!(html.contains("<title>Flag generator</title>"));
        assert!(html.contains("<main><p>Intro</p> <svg"));
        assert!(html.contains(r#"viewBox="0 0 342 180""#));

        let components = html.matches(r#"name="components""#).count();
        assert!((2..4).contains(&components));
        assert!(html.contains("component-0"));
    }
}
