use crate::error::ParseError;
use std::str::FromStr;

/// 4 fixed directions for tiny, predictable loops
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl FromStr for Direction {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            b"north" => Ok(Direction::North),
            b"south" => Ok(Direction::South),
            b"east" => Ok(Direction::East),
            b"west" => Ok(Direction::West),
            _ => Err(ParseError::UnknownDirection {
                line: 0,
                direction: s.to_string(),
            }),
        }
    }
}

impl Direction {
    /// All directions, also the cyclic probing order of the movement engine
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Directions the map generator emits; the other two are implied by reciprocity
    pub const GENERATED: [Direction; 2] = [Direction::East, Direction::South];

    /// Get direction index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction whose road leads back
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// The `n`-th direction after `self` in `ALL`, wrapping around
    #[inline]
    pub const fn rotate(self, n: usize) -> Direction {
        Direction::ALL[(self.index() + n) % 4]
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        for dir in Direction::ALL {
            assert_eq!(dir.as_str().parse::<Direction>().unwrap(), dir);
        }
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(ParseError::UnknownDirection { .. })
        ));
        // keywords are case sensitive
        assert!("North".parse::<Direction>().is_err());
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
    }

    #[test]
    fn test_rotate_visits_every_direction() {
        for start in Direction::ALL {
            let mut seen: Vec<Direction> = (0..4).map(|k| start.rotate(k)).collect();
            assert_eq!(seen[0], start);
            seen.sort_by_key(|d| d.index());
            assert_eq!(seen, Direction::ALL.to_vec());
        }
        assert_eq!(Direction::West.rotate(1), Direction::North);
    }

    #[test]
    fn test_generated_subset_never_overlaps_opposites() {
        for dir in Direction::GENERATED {
            assert!(!Direction::GENERATED.contains(&dir.opposite()));
        }
    }
}
