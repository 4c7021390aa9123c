use crate::board::entity::FoodMarker;
use crate::board::grid::Grid;
use crate::error::BoardError;
use crate::insect::Insect;

/// Everything one run needs: the populated board and the insects in turn order
#[derive(Clone, Debug)]
pub struct Scenario {
    pub grid: Grid,
    pub insects: Vec<Insect>,
}

impl Scenario {
    pub fn new(size: i32) -> Result<Self, BoardError> {
        Ok(Self {
            grid: Grid::new(size)?,
            insects: Vec::new(),
        })
    }

    /// Place an insect and enroll it for a turn
    pub fn add_insect(&mut self, insect: Insect) -> Result<(), BoardError> {
        self.grid.insert(insect)?;
        self.insects.push(insect);
        Ok(())
    }

    pub fn add_food(&mut self, food: FoodMarker) -> Result<(), BoardError> {
        self.grid.insert(food)
    }
}
