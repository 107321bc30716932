//! Domain layer - Flag components, geometry and random generation

pub mod error;
pub mod flag;

pub use error::DomainError;
pub use flag::{
    Color, Component, ComponentKind, ComponentSettings, Flag, FlagDimensions, FlagGenerator,
    Shape,
};
