//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bounds of the toroidal plane creatures live on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f64,
    pub height: f64,
}

impl World {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x{:.1}", self.width, self.height)
    }
}

/// Continuous 2D position in the world
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displace by `(dx, dy)` and wrap both axes back into the world.
    pub fn wrapped(&self, dx: f64, dy: f64, world: &World) -> Self {
        Self {
            x: wrap_axis(self.x + dx, world.width),
            y: wrap_axis(self.y + dy, world.height),
        }
    }

    /// Straight-line distance. The plane wraps for movement only, so
    /// this never takes the shorter path across an edge.
    pub fn distance(&self, other: &Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of the vector pointing from `self` to `other`.
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

fn wrap_axis(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round a tiny negative value up to `extent` itself
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_position_wrap() {
        let world = World::new(3.0, 3.0);

        let pos = Position::new(2.9, 0.2).wrapped(0.5, 0.0, &world);
        assert!((pos.x - 0.4).abs() < 1e-9);
        assert!((pos.y - 0.2).abs() < 1e-9);

        let pos = Position::new(0.1, 0.1).wrapped(-0.5, -0.2, &world);
        assert!((pos.x - 2.6).abs() < 1e-9);
        assert!((pos.y - 2.9).abs() < 1e-9);

        let pos = Position::new(1.0, 1.0).wrapped(2.0, 0.0, &world);
        assert_eq!(pos.x, 0.0);
    }

    #[test]
    fn test_wrap_never_returns_extent() {
        let world = World::new(3.0, 3.0);
        let pos = Position::new(0.0, 0.0).wrapped(-1e-17, -1e-17, &world);
        assert!(pos.x < world.width);
        assert!(pos.y < world.height);
    }

    #[test]
    fn test_distance_is_flat_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);

        // Opposite edges are far apart even though the plane wraps
        let left = Position::new(0.1, 5.0);
        let right = Position::new(9.9, 5.0);
        assert!((left.distance(&right) - 9.8).abs() < 1e-9);
    }

    #[test]
    fn test_angle_to() {
        let origin = Position::new(5.0, 5.0);
        assert_eq!(origin.angle_to(&Position::new(8.0, 5.0)), 0.0);
        let up = origin.angle_to(&Position::new(5.0, 6.0));
        assert!((up - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_world_display() {
        assert_eq!(World::new(40.0, 30.0).to_string(), "40.0x30.0");
    }

    proptest! {
        #[test]
        fn prop_wrapped_stays_inside_world(
            x in 0.0f64..50.0,
            y in 0.0f64..50.0,
            dx in -200.0f64..200.0,
            dy in -200.0f64..200.0,
        ) {
            let world = World::new(50.0, 50.0);
            let pos = Position::new(x, y).wrapped(dx, dy, &world);
            prop_assert!(pos.x >= 0.0 && pos.x < world.width);
            prop_assert!(pos.y >= 0.0 && pos.y < world.height);
        }
    }
}
