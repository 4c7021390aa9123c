use crate::direction::Direction;
use crate::error::ParseError;
use crate::position::Position;
use std::fmt;
use std::str::FromStr;

/// Insect team color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
        }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Color::Red, Color::Green, Color::Blue, Color::Yellow]
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseError::InvalidInsectColor)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Movement class of an insect
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    Grasshopper,
    Butterfly,
    Ant,
    Spider,
}

impl Species {
    /// Directions this species may travel, in scan order
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Species::Grasshopper | Species::Butterfly => &Direction::ORTHOGONAL,
            Species::Spider => &Direction::DIAGONAL,
            Species::Ant => &Direction::ALL,
        }
    }

    /// Offsets applied per ray iteration
    pub const fn step_size(self) -> u32 {
        match self {
            Species::Grasshopper => 2,
            Species::Butterfly | Species::Ant | Species::Spider => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Species::Grasshopper => "Grasshopper",
            Species::Butterfly => "Butterfly",
            Species::Ant => "Ant",
            Species::Spider => "Spider",
        }
    }
}

impl FromStr for Species {
    type Err = ParseError;

    /// Exact spelling only
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            b"Grasshopper" => Ok(Species::Grasshopper),
            b"Butterfly" => Ok(Species::Butterfly),
            b"Ant" => Ok(Species::Ant),
            b"Spider" => Ok(Species::Spider),
            _ => Err(ParseError::InvalidInsectType),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An insect placed on the board. Its position never changes; it leaves the
/// board after its single travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insect {
    pub position: Position,
    pub color: Color,
    pub species: Species,
}

impl Insect {
    pub fn new(position: Position, color: Color, species: Species) -> Self {
        Self {
            position,
            color,
            species,
        }
    }

    /// Whether `other` is on a rival team
    #[inline]
    pub fn is_rival(&self, other: &Insect) -> bool {
        self.color != other.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse_is_case_insensitive() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("YeLLoW".parse::<Color>().unwrap(), Color::Yellow);
        assert_eq!("GREEN".parse::<Color>().unwrap(), Color::Green);
        assert!(matches!("".parse::<Color>(), Err(ParseError::InvalidInsectColor)));
        assert!(matches!("Redd".parse::<Color>(), Err(ParseError::InvalidInsectColor)));
        assert!(matches!(
            "purple".parse::<Color>(),
            Err(ParseError::InvalidInsectColor)
        ));
    }

    #[test]
    fn test_species_parse_is_exact() {
        assert_eq!("Spider".parse::<Species>().unwrap(), Species::Spider);
        assert!(matches!(
            "spider".parse::<Species>(),
            Err(ParseError::InvalidInsectType)
        ));
    }

    #[test]
    fn test_capability_table() {
        assert_eq!(Species::Grasshopper.step_size(), 2);
        assert_eq!(Species::Butterfly.step_size(), 1);
        assert_eq!(Species::Ant.directions().len(), 8);
        assert_eq!(Species::Spider.directions(), &Direction::DIAGONAL);
        assert_eq!(Species::Butterfly.directions(), &Direction::ORTHOGONAL);
        assert_eq!(Species::Grasshopper.directions(), &Direction::ORTHOGONAL);
    }

    #[test]
    fn test_ant_scans_orthogonal_block_first() {
        let dirs = Species::Ant.directions();
        assert_eq!(&dirs[..4], &Direction::ORTHOGONAL);
        assert_eq!(&dirs[4..], &Direction::DIAGONAL);
    }

    #[test]
    fn test_rivalry() {
        let p = Position::new(1, 1);
        let red = Insect::new(p, Color::Red, Species::Ant);
        let red_spider = Insect::new(p, Color::Red, Species::Spider);
        let blue = Insect::new(p, Color::Blue, Species::Ant);

        assert!(red.is_rival(&blue));
        assert!(!red.is_rival(&red_spider));
    }
}
