use crate::alien::Alien;
use crate::error::SimulationError;
use crate::simulation::events::{DestructionEvent, EventLog};
use crate::simulation::spawner::{spawn_aliens, SpawnOutcome};
use crate::utils::DEFAULT_MAX_ROUNDS;
use crate::world::World;
use colored::Colorize;
use log::{debug, info, trace};
use std::path::Path;
use std::time::{Duration, Instant};

/// Knobs of a simulation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Upper bound on movement rounds
    pub max_rounds: u32,
    /// Do not print destruction events
    pub suppress_events: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            suppress_events: false,
        }
    }
}

/// Why the movement phase stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// No alien is left on the map
    AllDestroyed,
    /// Every alien left is stuck for good
    AllTrapped,
    /// The round cap was hit with aliens still wandering
    RoundLimit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementReport {
    pub rounds: u32,
    pub termination: Termination,
    pub aliens_left: usize,
}

/// Result of a whole run
#[derive(Clone, Debug)]
pub enum Outcome {
    Finished {
        report: MovementReport,
        aliens: Vec<Alien>,
    },
    /// Spawning ran out of intact cities; nothing is left to report
    WorldExhausted { first_unplaced: u32 },
}

/// Main simulation engine: spawning followed by the movement rounds
pub struct SimulationEngine {
    config: EngineConfig,
    events: EventLog,
    elapsed: Duration,
}

impl SimulationEngine {
    /// Create a new simulation engine
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            events: EventLog::new(config.suppress_events),
            elapsed: Duration::ZERO,
        }
    }

    /// Every city destruction so far, in order
    pub fn events(&self) -> &[DestructionEvent] {
        self.events.events()
    }

    /// Run the complete simulation
    pub fn run(
        &mut self,
        world: &mut World,
        alien_count: u32,
        rng: &mut fastrand::Rng,
    ) -> Result<Outcome, SimulationError> {
        let start = Instant::now();
        let spawn = spawn_aliens(world, alien_count, rng, &mut self.events)?;
        if let SpawnOutcome::WorldExhausted { first_unplaced } = spawn.outcome {
            self.elapsed = start.elapsed();
            return Ok(Outcome::WorldExhausted { first_unplaced });
        }
        info!(
            "spawned {} aliens, {} cities destroyed on landing",
            spawn.aliens.len(),
            self.events().len()
        );

        let mut aliens = spawn.aliens;
        let report = self.run_movement(world, &mut aliens, rng)?;
        self.elapsed = start.elapsed();
        info!(
            "movement stopped after {} rounds ({:?}), {} aliens left",
            report.rounds, report.termination, report.aliens_left
        );
        Ok(Outcome::Finished { report, aliens })
    }

    /// Move aliens round after round until none is left, all are trapped or
    /// the round cap is hit. `aliens[i]` must be alien `i`.
    pub fn run_movement(
        &mut self,
        world: &mut World,
        aliens: &mut [Alien],
        rng: &mut fastrand::Rng,
    ) -> Result<MovementReport, SimulationError> {
        let mut rounds = 0;

        let termination = loop {
            let left = aliens.iter().filter(|a| a.is_placed()).count();
            if left == 0 {
                break Termination::AllDestroyed;
            }
            if aliens.iter().all(|a| !a.is_placed() || a.is_trapped()) {
                break Termination::AllTrapped;
            }
            if rounds >= self.config.max_rounds {
                break Termination::RoundLimit;
            }

            rounds += 1;
            for i in 0..aliens.len() {
                self.step(world, aliens, i, rounds, rng)?;
            }
            debug!("round {}: {} aliens left", rounds, left);
        };

        Ok(MovementReport {
            rounds,
            termination,
            aliens_left: aliens.iter().filter(|a| a.is_placed()).count(),
        })
    }

    /// Advance alien `i` by one road
    fn step(
        &mut self,
        world: &mut World,
        aliens: &mut [Alien],
        i: usize,
        round: u32,
        rng: &mut fastrand::Rng,
    ) -> Result<(), SimulationError> {
        let alien = &aliens[i];
        if !alien.is_placed() || alien.is_trapped() {
            return Ok(());
        }
        let (id, pos) = (alien.id, alien.pos);

        let here = world.city(pos);
        if here.is_destroyed() || here.occupant != Some(id) {
            return Err(SimulationError::InvariantViolation(format!(
                "alien {} stands on {} which is destroyed or held by {:?}",
                id,
                world.city_name(pos),
                here.occupant
            )));
        }

        let Some(dst) = world.choose_exit(pos, rng) else {
            // destruction is permanent, so a trapped alien stays trapped
            trace!("alien {} is trapped in {}", id, world.city_name(pos));
            aliens[i].set_trapped();
            return Ok(());
        };
        if world.city(dst).is_destroyed() {
            return Err(SimulationError::InvariantViolation(format!(
                "alien {} tried to enter destroyed city {}",
                id,
                world.city_name(dst)
            )));
        }

        trace!(
            "alien {} moves {} -> {}",
            id,
            world.city_name(pos),
            world.city_name(dst)
        );
        world.city_mut(pos).occupant = None;
        aliens[i].move_to(dst);

        match world.city(dst).occupant {
            None => world.city_mut(dst).occupant = Some(id),
            Some(other) => {
                let resident = aliens
                    .get_mut(other as usize)
                    .filter(|a| a.id == other && a.city() == Some(dst))
                    .ok_or_else(|| {
                        SimulationError::InvariantViolation(format!(
                            "city {} is held by alien {} which is not there",
                            world.city_name(dst),
                            other
                        ))
                    })?;
                resident.remove();
                aliens[i].remove();
                world.city_mut(dst).destroy();
                self.events.record(world, dst, other, id, Some(round));
            }
        }
        Ok(())
    }

    /// Print simulation summary
    pub fn print_summary(&self, world: &World, report: &MovementReport, result: &Path) {
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            self.elapsed.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("rounds={}", report.rounds).cyan(),
            format!("aliens_left={}", report.aliens_left).cyan(),
            format!("destroyed={}", self.events().len()).cyan(),
            format!("survivors={}", world.count_survivors()).cyan(),
        );
        println!(
            "{} {}",
            "Result written to".green(),
            result.display().to_string().bold()
        );
    }
}
