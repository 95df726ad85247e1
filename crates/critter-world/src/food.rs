//! Food pellets.

use critter_core::constants::FOOD_RADIUS;
use critter_core::Position;

/// A food pellet. Removed as soon as a creature eats it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    pub fn radius(&self) -> f64 {
        FOOD_RADIUS
    }
}
