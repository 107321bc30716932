//! Request and error types

mod error;
mod swap;

pub use error::{not_found, ApiError};
pub use swap::{OneOrMany, SwapPayload, SwapRequest};
