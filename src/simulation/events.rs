use crate::world::World;
use colored::Colorize;

/// Two aliens met and took a city down with them
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestructionEvent {
    pub city: u32,
    pub name: String,
    /// (alien already there, alien arriving)
    pub aliens: (u32, u32),
    /// Movement round, `None` while spawning
    pub round: Option<u32>,
}

/// Records destruction events and prints them as they happen
#[derive(Debug, Default)]
pub struct EventLog {
    suppress: bool,
    events: Vec<DestructionEvent>,
}

impl EventLog {
    pub fn new(suppress: bool) -> Self {
        Self {
            suppress,
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[DestructionEvent] {
        &self.events
    }

    /// Log city destruction event
    pub fn record(&mut self, world: &World, city: u32, first: u32, second: u32, round: Option<u32>) {
        let event = DestructionEvent {
            city,
            name: world.city_name(city).to_string(),
            aliens: (first, second),
            round,
        };
        if !self.suppress {
            println!(
                "{} {} {} {}",
                "💥".red(),
                event.name.bright_red(),
                "has been destroyed by".red(),
                format!("alien {} and alien {}", first, second).yellow()
            );
        }
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::parse_world_from_str;

    #[test]
    fn test_record_keeps_events_when_suppressed() {
        let world = parse_world_from_str("A\nB\n").unwrap();
        let mut log = EventLog::new(true);

        log.record(&world, 1, 3, 5, Some(2));
        log.record(&world, 0, 0, 1, None);

        assert_eq!(log.events().len(), 2);
        assert_eq!(
            log.events()[0],
            DestructionEvent {
                city: 1,
                name: "B".to_string(),
                aliens: (3, 5),
                round: Some(2),
            }
        );
        assert_eq!(log.events()[1].round, None);
    }
}
