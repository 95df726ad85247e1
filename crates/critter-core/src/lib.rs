//! Core types and utilities for the Critter creature simulation.

pub mod config;
pub mod constants;
pub mod error;
pub mod rng;
pub mod types;

pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use rng::{create_rng, SimRng};
pub use types::*;
