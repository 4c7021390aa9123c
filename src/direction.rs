use std::fmt;

/// Eight compass directions; rows grow southward, columns grow eastward
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    /// Orthogonal directions in scan order
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Diagonal directions in scan order
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// All directions, orthogonal block first
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Signed (row, column) unit offset
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Human-readable label used in results
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
            Direction::NorthEast => "North-East",
            Direction::SouthEast => "South-East",
            Direction::SouthWest => "South-West",
            Direction::NorthWest => "North-West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_unit_steps() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
            assert_ne!((dr, dc), (0, 0));
        }
    }

    #[test]
    fn test_diagonal_split() {
        for dir in Direction::ORTHOGONAL {
            let (dr, dc) = dir.offset();
            assert!(dr == 0 || dc == 0);
        }
        for dir in Direction::DIAGONAL {
            let (dr, dc) = dir.offset();
            assert!(dr != 0 && dc != 0);
        }
    }

    #[test]
    fn test_all_is_orthogonal_then_diagonal() {
        assert_eq!(&Direction::ALL[..4], &Direction::ORTHOGONAL);
        assert_eq!(&Direction::ALL[4..], &Direction::DIAGONAL);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Direction::North.to_string(), "North");
        assert_eq!(Direction::SouthWest.as_str(), "South-West");
        assert_eq!(Direction::NorthEast.as_str(), "North-East");
    }
}
