//! Flag domain - component catalogue, settings payloads and generation

mod entity;
mod generator;
mod kind;
pub mod random;

pub use entity::{Color, Component, ComponentSettings, Flag, FlagDimensions};
pub use generator::{single_selection, FlagGenerator};
pub use kind::{ComponentKind, Shape};
