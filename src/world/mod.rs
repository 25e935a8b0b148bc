pub mod city;
pub mod parser;
pub mod world;

pub use city::City;
pub use parser::{parse_declarations, parse_world, parse_world_from_str, resolve, CityDecl};
pub use world::World;
