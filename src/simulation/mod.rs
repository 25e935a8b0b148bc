pub mod engine;
pub mod events;
pub mod spawner;

pub use engine::{EngineConfig, MovementReport, Outcome, SimulationEngine, Termination};
pub use events::{DestructionEvent, EventLog};
pub use spawner::{spawn_aliens, Spawn, SpawnOutcome};
