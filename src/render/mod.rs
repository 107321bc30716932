//! HTML and SVG string rendering

mod escape;
mod page;
mod svg;

pub use escape::{escape_attr, htmlify_json};
pub use page::{page, page_body};
pub use svg::{circle, component_container, flag, flag_svg, rect, SWAP_ENDPOINT};
