//! Random grid maps.
//!
//! Cities sit on the cells of a `width` x `height` grid; roads only join
//! horizontally or vertically adjacent cities. Only `east=` and `south=` roads
//! are written, the loader fills in the reverse side.

use crate::direction::Direction;
use std::io::{self, Write};

/// Shape of the grid to generate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub width: usize,
    pub height: usize,
    /// Probability in [0, 1] that a cell holds a city
    pub city_density: f64,
    /// Probability in [0, 1] that two adjacent cities are joined
    pub road_density: f64,
}

#[derive(Clone, Copy, Debug, Default)]
struct Cell {
    city: bool,
    roads: [bool; 2], // indexed like Direction::GENERATED
}

/// A generated grid, row-major
#[derive(Clone, Debug)]
pub struct GeneratedMap {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GeneratedMap {
    /// Name of the city at a grid cell
    pub fn city_name(x: usize, y: usize) -> String {
        format!("X{}Y{}", x, y)
    }

    pub fn has_city(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x].city
    }

    pub fn has_road(&self, x: usize, y: usize, direction: Direction) -> bool {
        let cell = &self.cells[y * self.width + x];
        Direction::GENERATED
            .iter()
            .position(|&d| d == direction)
            .is_some_and(|slot| cell.roads[slot])
    }

    pub fn city_count(&self) -> usize {
        self.cells.iter().filter(|c| c.city).count()
    }

    pub fn road_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|c| c.roads)
            .filter(|&r| r)
            .count()
    }

    /// Cell reached by walking one step in a generated direction
    fn step(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        match direction {
            Direction::East if x + 1 < self.width => Some((x + 1, y)),
            Direction::South if y + 1 < self.height => Some((x, y + 1)),
            _ => None,
        }
    }

    /// Write the map, one city per line in row-major order
    pub fn write_map<W: Write>(&self, mut out: W) -> io::Result<()> {
        let mut line = String::with_capacity(64);
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.has_city(x, y) {
                    continue;
                }
                line.clear();
                line.push_str(&Self::city_name(x, y));
                for direction in Direction::GENERATED {
                    if !self.has_road(x, y, direction) {
                        continue;
                    }
                    if let Some((nx, ny)) = self.step(x, y, direction) {
                        line.push(' ');
                        line.push_str(direction.as_str());
                        line.push('=');
                        line.push_str(&Self::city_name(nx, ny));
                    }
                }
                line.push('\n');
                out.write_all(line.as_bytes())?;
            }
        }
        out.flush()
    }

    pub fn render_map(&self) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_map(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Roll the cities first, then a road for every pair of adjacent cities
pub fn generate_map(spec: &GridSpec, rng: &mut fastrand::Rng) -> GeneratedMap {
    let mut map = GeneratedMap {
        width: spec.width,
        height: spec.height,
        cells: vec![Cell::default(); spec.width * spec.height],
    };

    for cell in map.cells.iter_mut() {
        cell.city = rng.f64() < spec.city_density;
    }

    for y in 0..map.height {
        for x in 0..map.width {
            if !map.has_city(x, y) {
                continue;
            }
            for (slot, direction) in Direction::GENERATED.into_iter().enumerate() {
                let linked = match map.step(x, y, direction) {
                    Some((nx, ny)) if map.has_city(nx, ny) => rng.f64() < spec.road_density,
                    _ => false,
                };
                map.cells[y * map.width + x].roads[slot] = linked;
            }
        }
    }

    map
}
