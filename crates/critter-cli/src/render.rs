use critter_world::Creature;

/// Text for a creature's continuous x, y coordinates.
pub fn format_creature_position(creature: &Creature) -> String {
    format!("x={:.2}, y={:.2}", creature.position.x, creature.position.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use critter_core::Position;

    #[test]
    fn test_format_creature_position() {
        let creature = Creature::new(Position::new(1.234, 5.0));
        assert_eq!(format_creature_position(&creature), "x=1.23, y=5.00");
    }
}
