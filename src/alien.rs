/// Alien state packed into a byte (placed/trapped) + aligned fields
#[derive(Clone, Debug)]
pub struct Alien {
    pub pos: u32,
    pub id: u32,
    pub moves: u32,
    state: u8, // bit 0 = placed, bit 1 = trapped
}

impl Alien {
    const PLACED: u8 = 0b01;
    const TRAPPED: u8 = 0b10;

    /// Create a new alien placed on the given city
    pub fn new(id: u32, pos: u32) -> Self {
        Self {
            id,
            pos,
            moves: 0,
            state: Self::PLACED,
        }
    }

    /// Still on the map (not removed by a collision)
    #[inline]
    pub fn is_placed(&self) -> bool {
        self.state & Self::PLACED != 0
    }

    /// Check if alien has no way out of its city
    #[inline]
    pub fn is_trapped(&self) -> bool {
        self.state & Self::TRAPPED != 0
    }

    /// City the alien stands on, `None` once removed
    #[inline]
    pub fn city(&self) -> Option<u32> {
        self.is_placed().then_some(self.pos)
    }

    /// Take the alien off the map. Removal is final.
    #[inline]
    pub fn remove(&mut self) {
        self.state = 0;
    }

    /// Mark the alien as trapped
    #[inline]
    pub fn set_trapped(&mut self) {
        self.state |= Self::TRAPPED;
    }

    /// Move alien to new position and increment move counter
    pub fn move_to(&mut self, new_pos: u32) {
        self.pos = new_pos;
        self.moves += 1;
    }
}
