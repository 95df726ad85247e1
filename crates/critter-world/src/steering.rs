//! Steering: neighbour queries and the combined movement bias.
//!
//! All queries use flat Euclidean distance and resolve ties by list
//! order, keeping the first minimum found.

use critter_core::constants::*;
use critter_core::Position;

use crate::creature::Creature;
use crate::food::Food;

/// Index of the pellet closest to `position`, if any food exists.
pub fn nearest_food(position: &Position, food: &[Food]) -> Option<usize> {
    nearest_by_distance(
        position,
        food.iter().enumerate().map(|(i, pellet)| (i, &pellet.position)),
    )
}

/// Nearest other creature with a strictly smaller size inside the
/// awareness radius of `creatures[index]`.
pub fn nearest_smaller_creature(creatures: &[Creature], index: usize) -> Option<usize> {
    let size = creatures[index].size();
    nearest_aware_creature(creatures, index, |other| other.size() < size)
}

/// Nearest other creature with a strictly larger size inside the
/// awareness radius of `creatures[index]`.
pub fn nearest_larger_creature(creatures: &[Creature], index: usize) -> Option<usize> {
    let size = creatures[index].size();
    nearest_aware_creature(creatures, index, |other| other.size() > size)
}

fn nearest_aware_creature<F>(creatures: &[Creature], index: usize, qualifies: F) -> Option<usize>
where
    F: Fn(&Creature) -> bool,
{
    let creature = &creatures[index];
    let awareness_radius = creature.awareness_radius();
    let candidates = creatures
        .iter()
        .enumerate()
        .filter(|&(i, other)| {
            i != index
                && qualifies(other)
                && creature.position.distance(&other.position) <= awareness_radius
        })
        .map(|(i, other)| (i, &other.position));
    nearest_by_distance(&creature.position, candidates)
}

fn nearest_by_distance<'a, I>(origin: &Position, candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, &'a Position)>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, position) in candidates {
        let distance = origin.distance(position);
        match best {
            // Strict comparison keeps the earliest index on ties
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

/// Accumulated steering vector. Only its direction is used.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SteeringBias {
    pub dx: f64,
    pub dy: f64,
}

impl SteeringBias {
    /// Random wander toward `wander_angle`, the one contribution that is
    /// always present.
    pub fn wander(wander_angle: f64) -> Self {
        let mut bias = Self::default();
        bias.push(wander_angle, RANDOM_WANDER_STRENGTH);
        bias
    }

    /// Add `strength` along `angle`. Negative strength pushes away.
    pub fn push(&mut self, angle: f64, strength: f64) {
        self.dx += strength * angle.cos();
        self.dy += strength * angle.sin();
    }

    pub fn angle(&self) -> f64 {
        self.dy.atan2(self.dx)
    }
}

/// Combine wander, food, prey, and predator contributions for
/// `creatures[index]` into a heading. `wander_angle` must already be drawn.
pub fn movement_angle(
    creatures: &[Creature],
    food: &[Food],
    index: usize,
    wander_angle: f64,
) -> f64 {
    let origin = creatures[index].position;
    let mut bias = SteeringBias::wander(wander_angle);

    if let Some(target) = nearest_food(&origin, food) {
        bias.push(origin.angle_to(&food[target].position), FOOD_BIAS_STRENGTH);
    }

    if let Some(prey) = nearest_smaller_creature(creatures, index) {
        bias.push(origin.angle_to(&creatures[prey].position), PREY_BIAS_STRENGTH);
    }

    if let Some(predator) = nearest_larger_creature(creatures, index) {
        bias.push(
            origin.angle_to(&creatures[predator].position),
            -PREDATOR_AVOID_STRENGTH,
        );
    }

    bias.angle()
}
