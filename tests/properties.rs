// Property tests over generated maps and random seeds.

use alien_invasion::alien::Alien;
use alien_invasion::direction::Direction;
use alien_invasion::generator::{generate_map, GridSpec};
use alien_invasion::simulation::{spawn_aliens, EngineConfig, EventLog, SimulationEngine, Termination};
use alien_invasion::world::{parse_world_from_str, World};
use proptest::prelude::*;

fn grid(seed: u64, width: usize, height: usize, city_density: f64, road_density: f64) -> World {
    let spec = GridSpec {
        width,
        height,
        city_density,
        road_density,
    };
    let mut rng = fastrand::Rng::with_seed(seed);
    let text = generate_map(&spec, &mut rng).render_map();
    parse_world_from_str(&text).expect("generated maps always load")
}

/// Every road has a matching road back
fn assert_reciprocal(world: &World) {
    for (idx, city) in world.cities.iter().enumerate() {
        for dir in Direction::ALL {
            if let Some(dst) = city.road(dir) {
                assert_eq!(world.city(dst).road(dir.opposite()), Some(idx as u32));
            }
        }
    }
}

/// One alien per intact city, none on destroyed ones, occupancy slots agree
fn assert_single_occupancy(world: &World, aliens: &[Alien]) {
    let mut seen = vec![false; world.cities.len()];
    for alien in aliens.iter().filter(|a| a.is_placed()) {
        let pos = alien.pos as usize;
        assert!(!world.cities[pos].is_destroyed());
        assert!(!seen[pos], "two aliens on {}", world.city_name(alien.pos));
        seen[pos] = true;
        assert_eq!(world.cities[pos].occupant, Some(alien.id));
    }
    for (pos, city) in world.cities.iter().enumerate() {
        if !seen[pos] {
            assert_eq!(city.occupant, None);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn loaded_maps_are_reciprocal(
        seed in any::<u64>(),
        width in 1usize..12,
        height in 1usize..12,
        density in 0.0f64..=1.0,
    ) {
        let world = grid(seed, width, height, 0.8, density);
        assert_reciprocal(&world);

        // loading the serialized world gives the same world back
        let again = parse_world_from_str(&world.render_map()).unwrap();
        prop_assert_eq!(again.render_map(), world.render_map());
    }

    #[test]
    fn spawning_never_doubles_up(
        seed in any::<u64>(),
        aliens in 1u32..40,
    ) {
        let mut world = grid(seed, 6, 6, 0.7, 0.6);
        let mut rng = fastrand::Rng::with_seed(seed ^ 0x5eed);
        let mut log = EventLog::new(true);
        let spawn = spawn_aliens(&mut world, aliens, &mut rng, &mut log).unwrap();

        let mut held = vec![None; world.cities.len()];
        for alien in spawn.aliens.iter().filter(|a| a.is_placed()) {
            prop_assert!(!world.city(alien.pos).is_destroyed());
            prop_assert!(held[alien.pos as usize].is_none());
            held[alien.pos as usize] = Some(alien.id);
        }
        for (idx, city) in world.cities.iter().enumerate() {
            prop_assert_eq!(city.occupant, held[idx]);
        }
    }

    #[test]
    fn simulation_keeps_its_invariants(
        seed in any::<u64>(),
        aliens in 1u32..20,
        max_rounds in 0u32..200,
    ) {
        let mut world = grid(seed, 5, 5, 0.9, 0.8);
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut log = EventLog::new(true);
        let spawn = spawn_aliens(&mut world, aliens, &mut rng, &mut log).unwrap();
        let destroyed_at_spawn: Vec<bool> = world.cities.iter().map(|c| c.is_destroyed()).collect();

        let mut aliens = spawn.aliens;
        let mut engine = SimulationEngine::new(EngineConfig { max_rounds: 1, suppress_events: true });
        assert_single_occupancy(&world, &aliens);

        // one round at a time, checking the board after every round
        let mut rounds = 0;
        let mut stopped = false;
        while rounds < max_rounds {
            let report = engine.run_movement(&mut world, &mut aliens, &mut rng).unwrap();
            rounds += report.rounds;
            assert_single_occupancy(&world, &aliens);
            if report.termination != Termination::RoundLimit {
                stopped = true;
                break;
            }
        }
        prop_assert!(rounds <= max_rounds);
        if !stopped {
            prop_assert_eq!(rounds, max_rounds);
        }

        // destruction is permanent
        for (idx, was) in destroyed_at_spawn.iter().enumerate() {
            if *was {
                prop_assert!(world.city(idx as u32).is_destroyed());
            }
        }

        // destroyed cities never show up in the result
        let result = world.render_map();
        for (idx, city) in world.cities.iter().enumerate() {
            if city.is_destroyed() {
                let name = world.city_name(idx as u32);
                let suffix = format!("={}", name);
                let absent = result
                    .split_whitespace()
                    .all(|token| token != name && !token.ends_with(suffix.as_str()));
                prop_assert!(absent, "destroyed city {} in result", name);
            }
        }
    }
}
