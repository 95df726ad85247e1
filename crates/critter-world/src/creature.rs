//! Creature state and growth curves.

use critter_core::constants::*;
use critter_core::{Position, World};

use crate::food::Food;

/// A creature in the simulation.
///
/// Identity is the creature's index in the engine's list; there is no
/// separate id.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub position: Position,
    pub mass: f64,
    /// Food units eaten so far. Doubles as the size rank.
    pub food_eaten: u64,
}

impl Creature {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            mass: 1.0,
            food_eaten: 0,
        }
    }

    /// Move once using wrap-around boundaries
    pub fn move_by(&mut self, world: &World, dx: f64, dy: f64) {
        self.position = self.position.wrapped(dx, dy, world);
    }

    pub fn radius(&self) -> f64 {
        BASE_CREATURE_RADIUS * self.mass.sqrt()
    }

    /// Rank used for predator/prey decisions. Not the physical size.
    pub fn size(&self) -> u64 {
        self.food_eaten
    }

    /// Mass multiplier for the next food unit
    pub fn growth_factor(&self) -> f64 {
        if self.food_eaten >= MAX_GROWTH_FOOD_EATEN {
            1.0
        } else if self.food_eaten >= LOW_GROWTH_FOOD_EATEN {
            LOW_GROWTH_FACTOR
        } else if self.food_eaten >= MID_GROWTH_FOOD_EATEN {
            MID_GROWTH_FACTOR
        } else {
            GROWTH_FACTOR
        }
    }

    /// Step length for this creature given the configured base speed
    pub fn movement_speed(&self, base_speed: f64) -> f64 {
        let slowdown_food_eaten = self.food_eaten.min(MAX_GROWTH_FOOD_EATEN) as f64;
        base_speed * (1.0 - SPEED_LOSS_PER_FOOD).powf(slowdown_food_eaten)
    }

    /// Apply `units` food units one at a time. Each unit grows mass by the
    /// factor for the count *before* that unit is added.
    pub fn feed(&mut self, units: u64) {
        for _ in 0..units {
            self.mass *= self.growth_factor();
            self.food_eaten += 1;
        }
    }

    pub fn awareness_multiplier(&self) -> f64 {
        if self.food_eaten <= AWARENESS_FOOD_START {
            return MAX_CREATURE_AWARENESS_MULTIPLIER;
        }
        if self.food_eaten >= AWARENESS_FOOD_END {
            return MIN_CREATURE_AWARENESS_MULTIPLIER;
        }

        let progress = (self.food_eaten - AWARENESS_FOOD_START) as f64
            / (AWARENESS_FOOD_END - AWARENESS_FOOD_START) as f64;
        MAX_CREATURE_AWARENESS_MULTIPLIER
            - progress * (MAX_CREATURE_AWARENESS_MULTIPLIER - MIN_CREATURE_AWARENESS_MULTIPLIER)
    }

    /// Distance within which this creature notices other creatures
    pub fn awareness_radius(&self) -> f64 {
        self.awareness_multiplier() * self.radius()
    }

    pub fn can_eat_food(&self, food: &Food) -> bool {
        self.position.distance(&food.position) <= self.radius() + food.radius()
    }

    pub fn overlaps(&self, other: &Creature) -> bool {
        self.position.distance(&other.position) <= self.radius() + other.radius()
    }

    /// Food units awarded to whoever absorbs this creature
    pub fn absorption_value(&self) -> u64 {
        1 + self.food_eaten / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn creature_with(food_eaten: u64) -> Creature {
        let mut creature = Creature::new(Position::new(0.0, 0.0));
        creature.food_eaten = food_eaten;
        creature
    }

    #[test]
    fn test_creature_creation() {
        let creature = Creature::new(Position::new(1.0, 2.0));
        assert_eq!(creature.mass, 1.0);
        assert_eq!(creature.food_eaten, 0);
        assert_eq!(creature.radius(), BASE_CREATURE_RADIUS);
    }

    #[test]
    fn test_radius_uses_square_root_of_mass() {
        let mut creature = creature_with(0);
        creature.mass = 4.0;
        assert_eq!(creature.radius(), 0.7);
    }

    #[test]
    fn test_size_matches_food_eaten_past_150() {
        assert_eq!(creature_with(200).size(), 200);
    }

    #[test]
    fn test_growth_factor_thresholds() {
        assert_eq!(creature_with(0).growth_factor(), 1.10);
        assert_eq!(creature_with(24).growth_factor(), 1.10);
        assert_eq!(creature_with(25).growth_factor(), 1.05);
        assert_eq!(creature_with(39).growth_factor(), 1.05);
        assert_eq!(creature_with(40).growth_factor(), 1.01);
        assert_eq!(creature_with(149).growth_factor(), 1.01);
        assert_eq!(creature_with(150).growth_factor(), 1.0);
        assert_eq!(creature_with(10_000).growth_factor(), 1.0);
    }

    #[test]
    fn test_feed_uses_pre_increment_count() {
        let mut creature = creature_with(24);
        creature.feed(2);
        // Unit 25 still grows at 1.10, unit 26 at 1.05
        assert_eq!(creature.mass, 1.0 * 1.10 * 1.05);
        assert_eq!(creature.food_eaten, 26);
    }

    #[test]
    fn test_feed_after_150_only_counts() {
        let mut creature = creature_with(150);
        creature.mass = 99.0;
        creature.feed(3);
        assert_eq!(creature.mass, 99.0);
        assert_eq!(creature.food_eaten, 153);
    }

    #[test]
    fn test_movement_speed_drops_one_percent_per_food() {
        let creature = creature_with(10);
        assert_eq!(creature.movement_speed(1.0), 0.99f64.powf(10.0));
    }

    #[test]
    fn test_movement_speed_plateaus_at_150() {
        let at_150 = creature_with(150).movement_speed(1.0);
        assert_eq!(creature_with(200).movement_speed(1.0), at_150);
        assert!(at_150 > 0.0);
    }

    #[test]
    fn test_feeding_slows_creature() {
        let mut creature = creature_with(0);
        creature.mass = 4.0;
        let before = creature.movement_speed(1.0);
        creature.feed(5);
        assert!(creature.movement_speed(1.0) < before);
    }

    #[test]
    fn test_awareness_interpolation() {
        assert_eq!(creature_with(0).awareness_multiplier(), 5.0);
        assert_eq!(creature_with(10).awareness_multiplier(), 5.0);
        assert_eq!(creature_with(30).awareness_multiplier(), 4.0);
        assert_eq!(creature_with(50).awareness_multiplier(), 3.0);
        assert_eq!(creature_with(500).awareness_multiplier(), 3.0);
        assert_eq!(creature_with(0).awareness_radius(), 5.0 * BASE_CREATURE_RADIUS);
    }

    #[test]
    fn test_can_eat_food_at_touching_distance() {
        let creature = creature_with(0);
        let touching = Food::new(Position::new(BASE_CREATURE_RADIUS + 0.18, 0.0));
        let apart = Food::new(Position::new(BASE_CREATURE_RADIUS + 0.19, 0.0));
        assert!(creature.can_eat_food(&touching));
        assert!(!creature.can_eat_food(&apart));
    }

    #[test]
    fn test_absorption_value_rounds_down() {
        assert_eq!(creature_with(9).absorption_value(), 5);
        assert_eq!(creature_with(5).absorption_value(), 3);
        assert_eq!(creature_with(0).absorption_value(), 1);
    }

    proptest! {
        #[test]
        fn prop_speed_decreases_until_plateau(food_eaten in 0u64..149) {
            let slower = creature_with(food_eaten + 1).movement_speed(0.8);
            let faster = creature_with(food_eaten).movement_speed(0.8);
            prop_assert!(slower < faster);
            prop_assert!(slower > 0.0);
        }

        #[test]
        fn prop_speed_constant_after_plateau(food_eaten in 150u64..100_000) {
            prop_assert_eq!(
                creature_with(food_eaten).movement_speed(0.8),
                creature_with(150).movement_speed(0.8)
            );
        }

        #[test]
        fn prop_feeding_never_shrinks(start in 0u64..300, units in 0u64..50) {
            let mut creature = creature_with(start);
            let mass_before = creature.mass;
            creature.feed(units);
            prop_assert!(creature.mass >= mass_before);
            prop_assert_eq!(creature.food_eaten, start + units);
        }
    }
}
