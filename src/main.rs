use clap::Parser;
use colored::Colorize;
use insect_board::board::parse_scenario;
use insect_board::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;
use tracing::error;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    // Load scenario; a rejected scenario still produces an output file
    let mut scenario = match parse_scenario(&args.input) {
        Ok(scenario) => scenario,
        Err(err) => {
            error!(input = %args.input, %err, "scenario rejected");
            std::fs::write(&args.output, format!("{}\n", err))?;
            eprintln!("{} {}", "✖".red(), err.to_string().bright_red());
            std::process::exit(1);
        }
    };

    // Run simulation
    let engine = SimulationEngine::new(args.suppress_events);
    let start = Instant::now();
    let results = engine.run(&mut scenario.grid, &scenario.insects);
    let elapsed = start.elapsed();

    let mut out = BufWriter::new(File::create(&args.output)?);
    engine.write_report(&mut out, &results)?;

    // Print results
    engine.print_summary(&scenario.grid, &results, elapsed);

    Ok(())
}
