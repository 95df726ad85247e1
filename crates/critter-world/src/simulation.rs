//! Simulation engine: owns the world, the RNG, and both populations.

use crate::creature::Creature;
use crate::food::Food;
use crate::stats::PopulationStats;
use crate::steering;
use critter_core::constants::STATS_LOG_INTERVAL;
use critter_core::{create_rng, Position, Result, SimRng, SimulationConfig, World};
use rand::Rng;
use std::f64::consts::TAU;
use tracing::{debug, info, instrument, trace};

pub struct Simulation {
    world: World,
    config: SimulationConfig,
    creatures: Vec<Creature>,
    food: Vec<Food>,
    rng: SimRng,
    tick: u64,
}

impl Simulation {
    /// Build a simulation from `config`.
    ///
    /// Creatures are spawned before food, each entity drawing x then y from
    /// the seeded stream, so equal configs give equal starting states.
    #[instrument(skip_all, fields(seed = config.seed))]
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let world = World::new(config.width, config.height);
        let mut sim = Self {
            world,
            creatures: Vec::with_capacity(config.creatures),
            food: Vec::with_capacity(config.food),
            rng: create_rng(config.seed),
            config,
            tick: 0,
        };

        for _ in 0..sim.config.creatures {
            let creature = sim.spawn_creature();
            sim.creatures.push(creature);
        }
        for _ in 0..sim.config.food {
            let pellet = sim.spawn_food();
            sim.food.push(pellet);
        }

        info!(
            world = %sim.world,
            creatures = sim.creatures.len(),
            food = sim.food.len(),
            speed = sim.config.speed,
            "Simulation created"
        );

        Ok(sim)
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Edit creature state in place. The list length cannot change here.
    pub fn creatures_mut(&mut self) -> &mut [Creature] {
        &mut self.creatures
    }

    pub fn food(&self) -> &[Food] {
        &self.food
    }

    /// Edit pellet positions in place. The list length cannot change here.
    pub fn food_mut(&mut self) -> &mut [Food] {
        &mut self.food
    }

    pub fn stats(&self) -> PopulationStats {
        PopulationStats::collect(self.tick, &self.creatures, &self.food)
    }

    /// Step length for `creature` under this simulation's base speed
    pub fn movement_speed(&self, creature: &Creature) -> f64 {
        creature.movement_speed(self.config.speed)
    }

    pub fn nearest_food(&self, index: usize) -> Option<usize> {
        steering::nearest_food(&self.creatures[index].position, &self.food)
    }

    pub fn nearest_smaller_creature(&self, index: usize) -> Option<usize> {
        steering::nearest_smaller_creature(&self.creatures, index)
    }

    pub fn nearest_larger_creature(&self, index: usize) -> Option<usize> {
        steering::nearest_larger_creature(&self.creatures, index)
    }

    /// Heading for `creatures[index]` this tick. Consumes one RNG draw.
    pub fn movement_angle(&mut self, index: usize) -> f64 {
        let wander_angle = self.rng.gen::<f64>() * TAU;
        steering::movement_angle(&self.creatures, &self.food, index, wander_angle)
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        // Later creatures see positions and food already updated this tick
        for index in 0..self.creatures.len() {
            let angle = self.movement_angle(index);
            let speed = self.movement_speed(&self.creatures[index]);
            let world = self.world;
            self.creatures[index].move_by(&world, speed * angle.cos(), speed * angle.sin());
            self.eat_overlapping_food(index);
        }

        self.resolve_creature_overlaps();
        self.tick += 1;

        trace!(
            tick = self.tick,
            creatures = self.creatures.len(),
            food = self.food.len(),
            "Tick complete"
        );

        if self.tick % STATS_LOG_INTERVAL == 0 {
            let stats = self.stats();
            debug!(
                event = "population_metrics",
                tick = stats.tick,
                creatures = stats.creatures,
                food = stats.food,
                total_mass = stats.total_mass,
                largest_mass = stats.largest_mass,
                largest_food_eaten = stats.largest_food_eaten,
                "Population metrics snapshot"
            );
        }
    }

    /// Step `ticks` times, recording every creature's position after each tick
    #[instrument(skip(self), fields(start_tick = self.tick))]
    pub fn run(&mut self, ticks: u64) -> Vec<Vec<Position>> {
        let mut positions = Vec::new();
        for _ in 0..ticks {
            self.step();
            positions.push(self.creatures.iter().map(|c| c.position).collect());
        }
        positions
    }

    pub fn add_creature(&mut self) {
        let creature = self.spawn_creature();
        self.creatures.push(creature);
        self.config.creatures = self.creatures.len();
    }

    /// Remove the last creature. The population never drops below one.
    pub fn remove_creature(&mut self) {
        if self.creatures.len() <= 1 {
            return;
        }
        self.creatures.pop();
        self.config.creatures = self.creatures.len();
    }

    pub fn add_food(&mut self) {
        let pellet = self.spawn_food();
        self.food.push(pellet);
        self.config.food = self.food.len();
    }

    pub fn remove_food(&mut self) {
        if self.food.pop().is_some() {
            self.config.food = self.food.len();
        }
    }

    /// Top food back up to the configured target. Never removes pellets.
    pub fn respawn_food(&mut self) {
        let missing = self.config.food.saturating_sub(self.food.len());
        for _ in 0..missing {
            let pellet = self.spawn_food();
            self.food.push(pellet);
        }
        if missing > 0 {
            debug!(tick = self.tick, respawned = missing, "Food respawned");
        }
    }

    fn random_position(&mut self) -> Position {
        let x = self.rng.gen::<f64>() * self.world.width;
        let y = self.rng.gen::<f64>() * self.world.height;
        Position::new(x, y)
    }

    fn spawn_creature(&mut self) -> Creature {
        Creature::new(self.random_position())
    }

    fn spawn_food(&mut self) -> Food {
        Food::new(self.random_position())
    }

    fn eat_overlapping_food(&mut self, index: usize) {
        let creature = &mut self.creatures[index];
        // Radius is re-read per pellet, so a creature can grow into
        // pellets later in the list during the same pass
        self.food.retain(|pellet| {
            if creature.can_eat_food(pellet) {
                creature.feed(1);
                false
            } else {
                true
            }
        });
    }

    /// Absorb overlapping creatures one pair at a time, rescanning from the
    /// start after every absorption.
    fn resolve_creature_overlaps(&mut self) {
        while self.creatures.len() > 1 {
            let Some((predator, prey)) = self.find_absorption() else {
                break;
            };
            self.absorb(predator, prey);
        }
    }

    /// First overlapping pair of unequal size, as `(larger, smaller)`
    fn find_absorption(&self) -> Option<(usize, usize)> {
        for (i, creature) in self.creatures.iter().enumerate() {
            for (j, other) in self.creatures.iter().enumerate().skip(i + 1) {
                if creature.size() == other.size() || !creature.overlaps(other) {
                    continue;
                }
                return if creature.size() > other.size() {
                    Some((i, j))
                } else {
                    Some((j, i))
                };
            }
        }
        None
    }

    fn absorb(&mut self, predator: usize, prey: usize) {
        let units = self.creatures[prey].absorption_value();
        self.creatures[predator].feed(units);
        let predator_food_eaten = self.creatures[predator].food_eaten;
        // Order-preserving removal: list order drives both RNG use and scans
        let eaten = self.creatures.remove(prey);

        debug!(
            event = "creature_absorbed",
            tick = self.tick,
            predator,
            prey,
            units,
            prey_food_eaten = eaten.food_eaten,
            predator_food_eaten,
            "Creature absorbed"
        );
    }
}
