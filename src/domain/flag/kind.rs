//! Component catalogue and geometry

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::FlagDimensions;
use super::random::{rand_int, rand_int_between};
use crate::domain::DomainError;

/// The fixed catalogue of flag components, addressed by index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ComponentKind {
    CenterCircle,
    RandomCircle,
    TopStripe,
    BottomStripe,
    LeftStripe,
    RightStripe,
}

/// Resolved SVG geometry for a component
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { cx: f64, cy: f64, r: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
}

impl ComponentKind {
    /// Catalogue order; the position is the wire index
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::CenterCircle,
        ComponentKind::RandomCircle,
        ComponentKind::TopStripe,
        ComponentKind::BottomStripe,
        ComponentKind::LeftStripe,
        ComponentKind::RightStripe,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::CenterCircle => 0,
            Self::RandomCircle => 1,
            Self::TopStripe => 2,
            Self::BottomStripe => 3,
            Self::LeftStripe => 4,
            Self::RightStripe => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Pick a kind uniformly from the catalogue
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rand_int(rng, Self::ALL.len() as u32) as usize]
    }

    /// Compute the geometry of this component on a flag of the given size.
    ///
    /// Only `RandomCircle` consumes randomness. Bottom and right stripes
    /// extend past the flag edge and are clipped by the viewBox.
    pub fn shape<R: Rng + ?Sized>(self, dimensions: FlagDimensions, rng: &mut R) -> Shape {
        let w = f64::from(dimensions.width);
        let h = f64::from(dimensions.height);

        match self {
            Self::CenterCircle => Shape::Circle {
                cx: w / 2.0,
                cy: h / 2.0,
                r: w.min(h) / 2.0,
            },
            Self::RandomCircle => Shape::Circle {
                cx: f64::from(rand_int_between(rng, 0, dimensions.width)),
                cy: f64::from(rand_int_between(rng, 0, dimensions.height)),
                r: f64::from(rand_int_between(
                    rng,
                    1,
                    dimensions.width.max(dimensions.height),
                )),
            },
            Self::TopStripe => Shape::Rect {
                x: 0.0,
                y: 0.0,
                width: w,
                height: h / 2.0,
            },
            Self::BottomStripe => Shape::Rect {
                x: 0.0,
                y: h / 2.0,
                width: w,
                height: h,
            },
            Self::LeftStripe => Shape::Rect {
                x: 0.0,
                y: 0.0,
                width: w / 2.0,
                height: h,
            },
            Self::RightStripe => Shape::Rect {
                x: w / 2.0,
                y: 0.0,
                width: w,
                height: h,
            },
        }
    }
}

impl TryFrom<String> for ComponentKind {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::from_index)
            .ok_or_else(|| DomainError::invalid_component_index(value))
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        kind.index().to_string()
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CenterCircle => "center_circle",
            Self::RandomCircle => "random_circle",
            Self::TopStripe => "top_stripe",
            Self::BottomStripe => "bottom_stripe",
            Self::LeftStripe => "left_stripe",
            Self::RightStripe => "right_stripe",
        };
        write!(f, "{}", name)
    }
}
