//! # Insect Board
//!
//! A one-shot foraging simulation on a square board.
//!
//! Every insect scans the directions its species can travel, picks the one
//! with the most visible food, then walks it once: eating food on the way,
//! stopping at the first rival-colored insect, and leaving the board.

pub mod board;
pub mod cli;
pub mod direction;
pub mod error;
pub mod insect;
pub mod position;
pub mod simulation;
pub mod utils;

pub use board::{Entity, FoodMarker, Grid, Scenario};
pub use cli::Args;
pub use direction::Direction;
pub use error::{BoardError, ParseError, Result};
pub use insect::{Color, Insect, Species};
pub use position::Position;
pub use simulation::{SimulationEngine, TurnResult};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Args, BoardError, Color, Direction, Entity, FoodMarker, Grid, Insect, ParseError,
        Position, Result, Scenario, SimulationEngine, Species, TurnResult,
    };
}
