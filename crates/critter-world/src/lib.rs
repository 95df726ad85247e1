//! World simulation engine.
//!
//! Creatures wander a toroidal plane, eat food pellets, and absorb smaller
//! creatures they overlap with.

pub mod creature;
pub mod food;
pub mod simulation;
pub mod stats;
pub mod steering;

pub use creature::Creature;
pub use food::Food;
pub use simulation::Simulation;
pub use stats::PopulationStats;
