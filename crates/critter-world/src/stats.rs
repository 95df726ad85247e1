//! Population statistics snapshots.

use serde::{Deserialize, Serialize};

use crate::creature::Creature;
use crate::food::Food;

/// Aggregate view of the population at one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub tick: u64,
    pub creatures: usize,
    pub food: usize,
    pub total_mass: f64,
    pub largest_mass: f64,
    /// Highest `food_eaten` in the population
    pub largest_food_eaten: u64,
}

impl PopulationStats {
    pub fn collect(tick: u64, creatures: &[Creature], food: &[Food]) -> Self {
        Self {
            tick,
            creatures: creatures.len(),
            food: food.len(),
            total_mass: creatures.iter().map(|c| c.mass).sum(),
            largest_mass: creatures.iter().map(|c| c.mass).fold(0.0, f64::max),
            largest_food_eaten: creatures.iter().map(|c| c.food_eaten).max().unwrap_or(0),
        }
    }

    pub fn mean_mass(&self) -> f64 {
        if self.creatures == 0 {
            0.0
        } else {
            self.total_mass / self.creatures as f64
        }
    }
}
