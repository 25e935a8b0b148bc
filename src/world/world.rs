use crate::direction::Direction;
use crate::world::city::City;
use std::collections::HashMap;
use std::io::{self, Write};

/// The city table: names + cities, indices stable for the whole run
#[derive(Clone, Debug)]
pub struct World {
    pub names: Vec<String>,
    pub cities: Vec<City>,
    index: HashMap<String, u32>,
}

impl World {
    /// Create a new world from names and cities
    pub fn new(names: Vec<String>, cities: Vec<City>) -> Self {
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i as u32))
            .collect();
        Self {
            names,
            cities,
            index,
        }
    }

    /// Look a city up by name
    #[inline]
    pub fn city_index(&self, name: &str) -> Option<u32> {
        self.index.get(name).copied()
    }

    /// Get a city by index
    #[inline]
    pub fn city(&self, idx: u32) -> &City {
        &self.cities[idx as usize]
    }

    /// Get a mutable city by index
    #[inline]
    pub fn city_mut(&mut self, idx: u32) -> &mut City {
        &mut self.cities[idx as usize]
    }

    /// Get the name of a city by index
    pub fn city_name(&self, idx: u32) -> &str {
        &self.names[self.cities[idx as usize].name_idx as usize]
    }

    /// First intact city at or after `start`, wrapping around the table
    pub fn find_intact_from(&self, start: usize) -> Option<u32> {
        let n = self.cities.len();
        (0..n)
            .map(|k| (start + k) % n)
            .find(|&i| !self.cities[i].is_destroyed())
            .map(|i| i as u32)
    }

    /// Pick an exit out of `pos`: random start direction, then the fixed
    /// cyclic order until a road to an intact city turns up.
    /// Returns `None` when the city has no such road.
    pub fn choose_exit(&self, pos: u32, rng: &mut fastrand::Rng) -> Option<u32> {
        let city = self.city(pos);
        let start = Direction::ALL[rng.usize(..Direction::ALL.len())];
        (0..Direction::ALL.len())
            .filter_map(|k| city.road(start.rotate(k)))
            .find(|&dst| !self.city(dst).is_destroyed())
    }

    /// Count surviving cities
    pub fn count_survivors(&self) -> usize {
        self.cities.iter().filter(|c| !c.is_destroyed()).count()
    }

    /// Write the surviving world in the map file format
    pub fn write_map<W: Write>(&self, mut out: W) -> io::Result<()> {
        let mut line = String::with_capacity(128);
        for (idx, city) in self.cities.iter().enumerate() {
            if city.is_destroyed() {
                continue;
            }
            line.clear();
            line.push_str(self.city_name(idx as u32));

            for direction in Direction::ALL {
                match city.road(direction) {
                    Some(dst) if !self.city(dst).is_destroyed() => {
                        line.push(' ');
                        line.push_str(direction.as_str());
                        line.push('=');
                        line.push_str(self.city_name(dst));
                    }
                    _ => {}
                }
            }
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        out.flush()
    }

    /// The surviving world as a string, see [`World::write_map`]
    pub fn render_map(&self) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_map(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
