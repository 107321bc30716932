//! Introductory markdown shown above the flag

use std::path::Path;

use pulldown_cmark::{html, Options, Parser};
use tracing::{info, warn};

/// Render markdown to HTML
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// Read and render the intro document once at startup; a missing or
/// unreadable file yields an empty intro
pub fn load_intro(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();

    match std::fs::read_to_string(path) {
        Ok(markdown) => {
            info!(path = %path.display(), "Loaded intro document");
            render_markdown(&markdown)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Intro document unavailable, rendering without it");
            String::new()
        }
    }
}
