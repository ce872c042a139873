use bevy::math::Vec2;
use lv_config::PhysicsSettings;

use crate::boundary::{resolve, Viewport};
use crate::force::next_velocity;
use crate::Jitter;

/// One driven element. `index` matches the visual element the host renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub index: usize,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Element {
    pub fn at_rest(index: usize) -> Self {
        Self {
            index,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
        }
    }
}

/// Non-finite components read as zero so one bad value cannot poison later ticks.
pub fn finite_or_zero(v: Vec2) -> Vec2 {
    if v.is_finite() {
        v
    } else {
        Vec2::ZERO
    }
}

/// Immutable-length snapshot of every element.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    elements: Vec<Element>,
}

impl SimulationState {
    pub fn new(count: usize) -> Self {
        Self {
            elements: (0..count).map(Element::at_rest).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Render sink payload: one `(x, y)` offset per element index.
    pub fn offsets(&self) -> Vec<Vec2> {
        self.elements.iter().map(|e| finite_or_zero(e.position)).collect()
    }

    /// True when every element sits at the origin with no velocity.
    pub fn is_at_rest(&self) -> bool {
        self.elements
            .iter()
            .all(|e| e.position == Vec2::ZERO && e.velocity == Vec2::ZERO)
    }

    /// Compute the next snapshot. Every element reads only from `self`, so the
    /// result does not depend on iteration order; velocity and position of each
    /// element land together.
    pub fn advance(
        &self,
        settings: &PhysicsSettings,
        viewport: Viewport,
        jitter: &mut dyn Jitter,
    ) -> SimulationState {
        let elements = self
            .elements
            .iter()
            .map(|e| {
                let velocity = next_velocity(finite_or_zero(e.velocity), settings, jitter);
                let proposed = finite_or_zero(e.position) + velocity;
                let (position, velocity) = resolve(proposed, velocity, viewport, settings);
                Element {
                    index: e.index,
                    position,
                    velocity,
                }
            })
            .collect();
        SimulationState { elements }
    }

    /// Same positions, velocities replaced by `impulse(element)`.
    pub fn with_velocities(&self, mut impulse: impl FnMut(&Element) -> Vec2) -> SimulationState {
        let elements = self
            .elements
            .iter()
            .map(|e| Element {
                velocity: impulse(e),
                ..*e
            })
            .collect();
        SimulationState { elements }
    }

    /// Fresh state with the same element count.
    pub fn zeroed(&self) -> SimulationState {
        SimulationState::new(self.len())
    }

    #[cfg(test)]
    pub(crate) fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }
}
