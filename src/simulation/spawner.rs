use crate::alien::Alien;
use crate::error::SimulationError;
use crate::simulation::events::EventLog;
use crate::world::World;
use log::{info, trace};

/// How spawning ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// Every alien landed (possibly dying on arrival)
    Complete,
    /// No intact city was left for alien `first_unplaced`; it and every later
    /// alien never landed
    WorldExhausted { first_unplaced: u32 },
}

/// Aliens that landed, indexed by id
#[derive(Clone, Debug)]
pub struct Spawn {
    pub aliens: Vec<Alien>,
    pub outcome: SpawnOutcome,
}

/// Land `count` aliens one by one on uniformly chosen cities.
///
/// A destroyed pick is replaced by the next intact city in index order. An
/// alien landing on an occupied city destroys it, together with both aliens.
pub fn spawn_aliens(
    world: &mut World,
    count: u32,
    rng: &mut fastrand::Rng,
    events: &mut EventLog,
) -> Result<Spawn, SimulationError> {
    // two aliens per city at most before the world runs out
    let capacity = (count as usize).min(world.cities.len().saturating_mul(2) + 1);
    let mut aliens: Vec<Alien> = Vec::with_capacity(capacity);

    for id in 0..count {
        let landing = if world.cities.is_empty() {
            None
        } else {
            world.find_intact_from(rng.usize(..world.cities.len()))
        };
        let Some(pos) = landing else {
            info!("world exhausted: no intact city left for alien {}", id);
            return Ok(Spawn {
                aliens,
                outcome: SpawnOutcome::WorldExhausted { first_unplaced: id },
            });
        };

        let mut alien = Alien::new(id, pos);
        match world.city(pos).occupant {
            None => {
                trace!("alien {} lands on {}", id, world.city_name(pos));
                world.city_mut(pos).occupant = Some(id);
            }
            Some(other) => {
                let resident = aliens
                    .get_mut(other as usize)
                    .filter(|a| a.city() == Some(pos))
                    .ok_or_else(|| {
                        SimulationError::InvariantViolation(format!(
                            "city {} is held by alien {} which is not there",
                            pos, other
                        ))
                    })?;
                resident.remove();
                alien.remove();
                world.city_mut(pos).destroy();
                events.record(world, pos, other, id, None);
            }
        }
        aliens.push(alien);
    }

    Ok(Spawn {
        aliens,
        outcome: SpawnOutcome::Complete,
    })
}
