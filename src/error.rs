use crate::position::Position;
use thiserror::Error;

/// Errors raised by the board itself while it is being set up
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board side length below one
    #[error("invalid board size: {0}")]
    InvalidSize(i32),
    /// Placement outside the board
    #[error("cell {position} is outside the board")]
    OutOfBounds { position: Position },
    /// Placement onto an occupied cell
    #[error("cell {position} is already occupied")]
    Collision { position: Position },
}

/// Errors raised while loading a scenario file.
///
/// The messages are the ones written to the output file, so keep them stable.
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid board size")]
    InvalidBoardSize,
    #[error("Invalid number of insects")]
    InvalidNumberOfInsects,
    #[error("Invalid number of food points")]
    InvalidNumberOfFoodPoints,
    #[error("Invalid insect color")]
    InvalidInsectColor,
    #[error("Invalid insect type")]
    InvalidInsectType,
    #[error("Invalid entity position")]
    InvalidEntityPosition,
    #[error("Duplicate insects")]
    DuplicateInsects,
    #[error("Two entities in the same position")]
    TwoEntitiesOnSamePosition,
    #[error("Invalid food amount")]
    InvalidFoodAmount,
    /// Input ended before the declared number of lines (1-indexed)
    #[error("Missing input line {0}")]
    MissingLine(usize),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ParseError>;
