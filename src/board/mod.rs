pub mod entity;
pub mod grid;
pub mod parser;
pub mod scenario;

pub use entity::{Entity, FoodMarker};
pub use grid::Grid;
pub use parser::{parse_scenario, parse_scenario_from_str};
pub use scenario::Scenario;
