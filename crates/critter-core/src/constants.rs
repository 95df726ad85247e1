//! Tuning constants for creature growth, speed, and steering.

/// Radius of a creature with unit mass (world units).
pub const BASE_CREATURE_RADIUS: f64 = 0.35;

/// Fixed radius of a food pellet (world units).
pub const FOOD_RADIUS: f64 = 0.18;

/// Mass multiplier per food unit below `MID_GROWTH_FOOD_EATEN`.
pub const GROWTH_FACTOR: f64 = 1.10;
/// Mass multiplier per food unit from `MID_GROWTH_FOOD_EATEN`.
pub const MID_GROWTH_FACTOR: f64 = 1.05;
/// Mass multiplier per food unit from `LOW_GROWTH_FOOD_EATEN`.
pub const LOW_GROWTH_FACTOR: f64 = 1.01;

pub const MID_GROWTH_FOOD_EATEN: u64 = 25;
pub const LOW_GROWTH_FOOD_EATEN: u64 = 40;
/// Growth and speed decay both stop here.
pub const MAX_GROWTH_FOOD_EATEN: u64 = 150;

/// Fraction of speed lost per food unit eaten.
pub const SPEED_LOSS_PER_FOOD: f64 = 0.01;

pub const RANDOM_WANDER_STRENGTH: f64 = 0.25;
pub const FOOD_BIAS_STRENGTH: f64 = 0.7;
pub const PREY_BIAS_STRENGTH: f64 = 1.0;
pub const PREDATOR_AVOID_STRENGTH: f64 = 0.9;

pub const MAX_CREATURE_AWARENESS_MULTIPLIER: f64 = 5.0;
pub const MIN_CREATURE_AWARENESS_MULTIPLIER: f64 = 3.0;
/// Awareness starts shrinking after this many food units.
pub const AWARENESS_FOOD_START: u64 = 10;
/// Awareness stops shrinking at this many food units.
pub const AWARENESS_FOOD_END: u64 = 50;

/// Ticks between periodic population snapshots in the log.
pub const STATS_LOG_INTERVAL: u64 = 100;
