use crate::board::entity::Entity;
use crate::error::BoardError;
use crate::position::Position;
use std::collections::HashMap;

/// Square board of side `size` holding at most one entity per cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    cells: HashMap<Position, Entity>,
}

/// Bounds test shared with ray walks, which cannot hold a borrow of the grid
#[inline]
pub(crate) fn within(size: i32, position: Position) -> bool {
    (1..=size).contains(&position.row) && (1..=size).contains(&position.col)
}

impl Grid {
    /// Create an empty board
    pub fn new(size: i32) -> Result<Self, BoardError> {
        if size < 1 {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: HashMap::new(),
        })
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, position: Position) -> bool {
        within(self.size, position)
    }

    #[inline]
    pub fn get(&self, position: Position) -> Option<&Entity> {
        self.cells.get(&position)
    }

    /// Place an entity; fails if its cell is off the board or taken
    pub fn insert(&mut self, entity: impl Into<Entity>) -> Result<(), BoardError> {
        let entity = entity.into();
        let position = entity.position();

        if !self.in_bounds(position) {
            return Err(BoardError::OutOfBounds { position });
        }
        if self.cells.contains_key(&position) {
            return Err(BoardError::Collision { position });
        }
        self.cells.insert(position, entity);
        Ok(())
    }

    /// Clear a cell. Idempotent.
    #[inline]
    pub fn remove(&mut self, position: Position) -> Option<Entity> {
        self.cells.remove(&position)
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sum of all food values still on the board
    pub fn total_food(&self) -> u64 {
        self.cells.values().map(|e| e.food_value() as u64).sum()
    }

    /// Count food markers still on the board
    pub fn count_food(&self) -> usize {
        self.cells
            .values()
            .filter(|e| matches!(e, Entity::Food(_)))
            .count()
    }
}
