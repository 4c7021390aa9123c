pub mod engine;
pub mod movement;

pub use engine::{SimulationEngine, TurnResult};
pub use movement::{best_direction, travel, visible_value, Ray};
