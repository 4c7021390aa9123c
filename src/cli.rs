use clap::Parser;

/// CLI arguments for the insect board simulation
#[derive(Parser, Debug)]
#[command(name = "insect_board", about = "🐜 One-shot insect foraging on a square board")]
pub struct Args {
    /// Path to the scenario file
    #[arg(short = 'i', long = "input", default_value = "input.txt")]
    pub input: String,

    /// Path the results (or the rejection message) are written to
    #[arg(short = 'o', long = "output", default_value = "output.txt")]
    pub output: String,

    /// Suppress per-insect console events
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}
