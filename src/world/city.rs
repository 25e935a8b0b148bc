use crate::direction::Direction;

/// Graph node: one city of the table
#[derive(Clone, Debug)]
pub struct City {
    pub name_idx: u32,                // index into `names`
    pub roads: [Option<u32>; 4],      // neighbour city by direction
    pub destroyed: bool,              // monotonic, never reset
    pub occupant: Option<u32>,        // alien id
}

impl City {
    /// Create a new city with the given name index
    #[inline]
    pub fn new(name_idx: u32) -> Self {
        Self {
            name_idx,
            roads: [None; 4],
            destroyed: false,
            occupant: None,
        }
    }

    /// Set road in a specific direction
    #[inline]
    pub fn set_road(&mut self, direction: Direction, city: u32) {
        self.roads[direction.index()] = Some(city);
    }

    /// Get road in a specific direction
    #[inline]
    pub fn road(&self, direction: Direction) -> Option<u32> {
        self.roads[direction.index()]
    }

    /// Destroy this city and evict whoever stood there
    #[inline]
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.occupant = None;
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}
