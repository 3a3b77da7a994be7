use std::path::PathBuf;

use booking_state_machine::{
    BookingContext, BookingState, Result, StateVisualization, demo, logger,
    observers::{ConsoleReporter, TransitionLogger},
};
use clap::Parser;
use log::LevelFilter;

/// Walks one room booking through its lifecycle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log at debug level instead of warn
    #[arg(short, long)]
    verbose: bool,

    /// Print the transition history as a markdown table
    #[arg(long)]
    history: bool,

    /// Print the transition history as JSON
    #[arg(long)]
    json: bool,

    /// Write a DOT graph of the state machine to this path
    #[arg(long, value_name = "PATH")]
    dot: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    logger::init(logger::level_from_env(default_level))?;

    let mut context = BookingContext::new(BookingState::Idle);
    context.register_observer(Box::new(ConsoleReporter));
    context.register_observer(Box::new(TransitionLogger));

    demo::run(&mut context, &mut std::io::stdout())?;

    if args.history {
        println!("\n{}", StateVisualization::history_table(context.history()));
    }

    if args.json {
        println!("\n{}", context.history_json()?);
    }

    if let Some(path) = args.dot {
        let dot = StateVisualization::generate_dot(&context);
        StateVisualization::save_dot_to_file(&dot, &path)?;
        log::info!(target: "booking", "state machine graph written to {}", path.display());
    }

    Ok(())
}
