//! Flag generation and single-component swapping

use std::ops::Range;

use rand::Rng;
use tracing::debug;

use super::entity::{Component, ComponentSettings, Flag, FlagDimensions};
use super::kind::ComponentKind;
use super::random::{rand_int_between, random_color};
use crate::domain::DomainError;

/// Builds random flags of a fixed size
#[derive(Debug, Clone)]
pub struct FlagGenerator {
    dimensions: FlagDimensions,
    component_count: Range<u32>,
}

impl FlagGenerator {
    pub fn new(dimensions: FlagDimensions, component_count: Range<u32>) -> Self {
        Self {
            dimensions,
            component_count,
        }
    }

    pub fn dimensions(&self) -> FlagDimensions {
        self.dimensions
    }

    /// Generate a fresh flag with `component-{i}` ids
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Flag {
        let count = rand_int_between(rng, self.component_count.start, self.component_count.end);

        let components = (0..count)
            .map(|i| self.random_component(format!("component-{}", i), rng))
            .collect::<Vec<_>>();

        debug!(count = components.len(), "Generated flag");

        Flag {
            dimensions: self.dimensions,
            components,
        }
    }

    /// Remove the selected component, redraw the rest from their settings and
    /// append a new random component with id `{selected}-swapped`
    pub fn swap<R: Rng + ?Sized>(
        &self,
        settings: Vec<ComponentSettings>,
        selected: &str,
        rng: &mut R,
    ) -> Result<Flag, DomainError> {
        if selected.is_empty() {
            return Err(DomainError::MissingSelection);
        }

        let position = settings
            .iter()
            .position(|s| s.component_id == selected)
            .ok_or_else(|| DomainError::component_not_found(selected))?;
        let removed_id = settings[position].component_id.clone();

        let mut components = settings
            .into_iter()
            .filter(|s| s.component_id != selected)
            .map(|s| Self::redraw(s, rng))
            .collect::<Vec<_>>();

        let replacement = self.random_component(format!("{}-swapped", removed_id), rng);
        debug!(
            removed = %removed_id,
            kind = %replacement.settings.component_index,
            "Swapped component"
        );
        components.push(replacement);

        Ok(Flag {
            dimensions: self.dimensions,
            components,
        })
    }

    fn random_component<R: Rng + ?Sized>(&self, component_id: String, rng: &mut R) -> Component {
        let kind = ComponentKind::random(rng);
        let settings = ComponentSettings {
            height: self.dimensions.height,
            width: self.dimensions.width,
            stroke: Some(random_color(rng)),
            fill: Some(random_color(rng)),
            component_id,
            component_index: kind,
        };

        Self::redraw(settings, rng)
    }

    /// Geometry is recomputed from the settings, so random circles move on redraw
    fn redraw<R: Rng + ?Sized>(settings: ComponentSettings, rng: &mut R) -> Component {
        let shape = settings.component_index.shape(settings.dimensions(), rng);
        Component { settings, shape }
    }
}

/// Reduce the submitted `selected` values to exactly one id
pub fn single_selection(values: Vec<String>) -> Result<String, DomainError> {
    let mut values = values.into_iter();

    match (values.next(), values.next()) {
        (Some(_), Some(_)) => Err(DomainError::MultipleSelection),
        (Some(value), None) if !value.is_empty() => Ok(value),
        _ => Err(DomainError::MissingSelection),
    }
}
