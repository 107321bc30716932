//! Infrastructure layer - logging and startup resources

pub mod intro;
pub mod logging;
