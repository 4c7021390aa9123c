use crate::board::entity::Entity;
use crate::board::grid::{within, Grid};
use crate::direction::Direction;
use crate::insect::{Insect, Species};
use crate::position::Position;
use tracing::{debug, trace};

/// In-bounds cells along a straight line, nearest first. The origin itself is
/// never yielded. A step past the `i32` range ends the ray.
///
/// Holds the board size rather than a borrow of the grid so travel can remove
/// cells while walking.
#[derive(Clone, Debug)]
pub struct Ray {
    next: Option<Position>,
    direction: Direction,
    stride: u32,
    size: i32,
}

impl Ray {
    pub fn new(origin: Position, direction: Direction, stride: u32, grid: &Grid) -> Self {
        Self {
            next: origin.checked_step_by(direction, stride),
            direction,
            stride,
            size: grid.size(),
        }
    }

    /// Ray with the species' step size
    pub fn for_species(species: Species, origin: Position, direction: Direction, grid: &Grid) -> Self {
        Self::new(origin, direction, species.step_size(), grid)
    }
}

impl Iterator for Ray {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        let current = self.next.filter(|pos| within(self.size, *pos))?;
        self.next = current.checked_step_by(self.direction, self.stride);
        Some(current)
    }
}

/// Total food value a `species` standing at `origin` can see along `direction`.
/// Insects do not obstruct the view.
pub fn visible_value(species: Species, direction: Direction, origin: Position, grid: &Grid) -> u64 {
    Ray::for_species(species, origin, direction, grid)
        .filter_map(|pos| grid.get(pos))
        .map(|entity| entity.food_value() as u64)
        .sum()
}

/// Direction with the most visible food; ties go to the one scanned first
pub fn best_direction(insect: &Insect, grid: &Grid) -> Direction {
    let mut best = Direction::North;
    let mut best_value: Option<u64> = None;

    for &dir in insect.species.directions() {
        let value = visible_value(insect.species, dir, insect.position, grid);
        trace!(species = %insect.species, direction = %dir, value, "scanned");
        if best_value.map_or(true, |b| value > b) {
            best = dir;
            best_value = Some(value);
        }
    }

    debug!(
        color = %insect.color,
        species = %insect.species,
        direction = %best,
        value = best_value.unwrap_or(0),
        "direction chosen"
    );
    best
}

/// Walk `direction` eating every food marker on the way, stopping after the
/// first rival insect. The insect's own cell is cleared afterwards no matter
/// how far it got. Returns the value eaten.
pub fn travel(insect: &Insect, direction: Direction, grid: &mut Grid) -> u64 {
    let mut collected = 0u64;

    for pos in Ray::for_species(insect.species, insect.position, direction, grid) {
        match grid.get(pos).copied() {
            Some(Entity::Food(food)) => {
                collected += food.value as u64;
                grid.remove(pos);
                debug!(position = %pos, value = food.value, "food consumed");
            }
            Some(Entity::Insect(other)) if insect.is_rival(&other) => {
                debug!(position = %pos, blocker = %other.color, "blocked by rival");
                break;
            }
            _ => {}
        }
    }

    grid.remove(insect.position);
    collected
}
