use crate::board::grid::Grid;
use crate::direction::Direction;
use crate::insect::{Color, Insect, Species};
use crate::simulation::movement::{best_direction, travel};
use colored::Colorize;
use std::fmt;
use std::io::{self, Write};
use tracing::info;

/// Outcome of one insect's turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnResult {
    pub color: Color,
    pub species: Species,
    pub direction: Direction,
    pub collected: u64,
}

impl fmt::Display for TurnResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.color, self.species, self.direction, self.collected
        )
    }
}

/// Resolves every insect's single turn against a shared board
pub struct SimulationEngine {
    suppress_events: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine
    pub fn new(suppress_events: bool) -> Self {
        Self { suppress_events }
    }

    /// Resolve all insects in order. Each insect picks its direction on the
    /// board as left by the insects before it, travels, and leaves the board.
    pub fn run(&self, grid: &mut Grid, insects: &[Insect]) -> Vec<TurnResult> {
        info!(
            size = grid.size(),
            insects = insects.len(),
            food = grid.count_food(),
            "simulation started"
        );

        let results: Vec<TurnResult> = insects
            .iter()
            .map(|insect| {
                let result = self.resolve_turn(grid, insect);
                self.log_turn(&result);
                result
            })
            .collect();

        info!(
            remaining_food = grid.count_food(),
            remaining_entities = grid.len(),
            "simulation finished"
        );
        results
    }

    /// One insect: scout, then travel
    pub fn resolve_turn(&self, grid: &mut Grid, insect: &Insect) -> TurnResult {
        let direction = best_direction(insect, grid);
        let collected = travel(insect, direction, grid);
        TurnResult {
            color: insect.color,
            species: insect.species,
            direction,
            collected,
        }
    }

    /// Write one result per line
    pub fn write_report<W: Write>(&self, out: &mut W, results: &[TurnResult]) -> io::Result<()> {
        for result in results {
            writeln!(out, "{}", result)?;
        }
        out.flush()
    }

    #[inline]
    fn log_turn(&self, result: &TurnResult) {
        if self.suppress_events {
            return;
        }
        println!(
            "{} {} {} {}",
            "🦗".green(),
            format!("{} {}", result.color, result.species).bright_yellow(),
            format!("went {}", result.direction).cyan(),
            format!("and collected {}", result.collected).green()
        );
    }

    /// Print simulation summary
    pub fn print_summary(&self, grid: &Grid, results: &[TurnResult], elapsed: std::time::Duration) {
        let collected: u64 = results.iter().map(|r| r.collected).sum();
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            elapsed.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("insects={}", results.len()).cyan(),
            format!("collected={}", collected).cyan(),
            format!("food_left={}", grid.total_food()).cyan(),
        );
    }
}
