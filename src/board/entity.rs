use crate::insect::Insect;
use crate::position::Position;

/// Food marker: consumed by the first insect that travels over it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoodMarker {
    pub position: Position,
    pub value: u32,
}

impl FoodMarker {
    #[inline]
    pub fn new(position: Position, value: u32) -> Self {
        Self { position, value }
    }
}

/// Anything that occupies a board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Food(FoodMarker),
    Insect(Insect),
}

impl Entity {
    #[inline]
    pub fn position(&self) -> Position {
        match self {
            Entity::Food(food) => food.position,
            Entity::Insect(insect) => insect.position,
        }
    }

    /// Food value held by this cell, zero for insects
    #[inline]
    pub fn food_value(&self) -> u32 {
        match self {
            Entity::Food(food) => food.value,
            Entity::Insect(_) => 0,
        }
    }
}

impl From<FoodMarker> for Entity {
    fn from(food: FoodMarker) -> Self {
        Entity::Food(food)
    }
}

impl From<Insect> for Entity {
    fn from(insect: Insect) -> Self {
        Entity::Insect(insect)
    }
}
