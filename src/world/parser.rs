use crate::direction::Direction;
use crate::error::{ParseError, Result};
use crate::world::city::City;
use crate::world::world::World;
use log::{debug, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One map line after the first pass: roads still refer to cities by name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityDecl {
    pub name: String,
    pub line: usize,
    pub roads: [Option<String>; 4],
}

impl CityDecl {
    pub fn new(name: &str, line: usize) -> Self {
        Self {
            name: name.to_string(),
            line,
            roads: Default::default(),
        }
    }

    /// Declared neighbour name in a specific direction
    pub fn road(&self, direction: Direction) -> Option<&str> {
        self.roads[direction.index()].as_deref()
    }
}

/// Parse a world from a file path
pub fn parse_world(path: impl AsRef<Path>) -> Result<World> {
    let file = File::open(path)?;
    let reader = BufReader::with_capacity(64 * 1024, file);
    resolve(parse_declarations(reader)?)
}

/// Parse a world directly from an in-memory string
pub fn parse_world_from_str(src: &str) -> Result<World> {
    resolve(parse_declarations(src.as_bytes())?)
}

/// First pass: split lines into city declarations.
///
/// Checks everything that can be decided from a single line (syntax,
/// direction keywords, self references) plus duplicate definitions. Neighbour
/// names are not looked up yet.
pub fn parse_declarations<R: BufRead>(reader: R) -> Result<Vec<CityDecl>> {
    let mut decls: Vec<CityDecl> = Vec::with_capacity(1024);
    let mut seen: HashSet<String> = HashSet::with_capacity(1024);

    for (n, line) in reader.lines().enumerate() {
        let line_no = n + 1;
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            continue;
        };

        if !seen.insert(name.to_string()) {
            return Err(ParseError::DuplicateCity {
                line: line_no,
                name: name.to_string(),
            });
        }

        let mut decl = CityDecl::new(name, line_no);
        for token in parts {
            let (dir, neighbor) = parse_road(token, line_no)?;
            if neighbor == name {
                return Err(ParseError::SelfReference {
                    line: line_no,
                    city: name.to_string(),
                });
            }
            if let Some(previous) = decl.roads[dir.index()].replace(neighbor.to_string()) {
                warn!(
                    "line {}: {} {}={} overrides {}={}",
                    line_no,
                    name,
                    dir.as_str(),
                    neighbor,
                    dir.as_str(),
                    previous
                );
            }
        }
        decls.push(decl);
    }

    debug!("first pass read {} city declarations", decls.len());
    Ok(decls)
}

/// Split a `DIRECTION=CITY` token
fn parse_road(token: &str, line: usize) -> Result<(Direction, &str)> {
    let mut kv = token.split('=');
    match (kv.next(), kv.next(), kv.next()) {
        (Some(dir), Some(neighbor), None) if !dir.is_empty() && !neighbor.is_empty() => {
            let dir = dir
                .parse::<Direction>()
                .map_err(|_| ParseError::UnknownDirection {
                    line,
                    direction: dir.to_string(),
                })?;
            Ok((dir, neighbor))
        }
        _ => Err(ParseError::Syntax {
            line,
            token: token.to_string(),
        }),
    }
}

/// Second pass: resolve neighbour names to indices and complete one-sided roads.
///
/// A declared road A->B in direction D sets B's opposite slot to A when that
/// slot is free; a slot pointing elsewhere is an inconsistency.
pub fn resolve(decls: Vec<CityDecl>) -> Result<World> {
    let names: Vec<String> = decls.iter().map(|d| d.name.clone()).collect();
    let cities: Vec<City> = (0..names.len()).map(|i| City::new(i as u32)).collect();
    let mut world = World::new(names, cities);

    let mut declared: Vec<(u32, Direction, u32, usize)> = Vec::with_capacity(decls.len() * 2);
    for (src, decl) in decls.iter().enumerate() {
        let src = src as u32;
        for dir in Direction::ALL {
            let Some(neighbor) = decl.road(dir) else {
                continue;
            };
            let dst = world
                .city_index(neighbor)
                .ok_or_else(|| ParseError::UnknownCity {
                    line: decl.line,
                    city: decl.name.clone(),
                    neighbor: neighbor.to_string(),
                })?;
            world.cities[src as usize].set_road(dir, dst);
            declared.push((src, dir, dst, decl.line));
        }
    }

    for (src, dir, dst, line) in declared {
        let back = dir.opposite();
        match world.cities[dst as usize].road(back) {
            None => world.cities[dst as usize].set_road(back, src),
            Some(other) if other == src => {}
            Some(other) => {
                return Err(ParseError::InconsistentRoad {
                    line,
                    city: world.city_name(src).to_string(),
                    direction: dir,
                    neighbor: world.city_name(dst).to_string(),
                    conflicting: world.city_name(other).to_string(),
                });
            }
        }
    }

    Ok(world)
}
