use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "deeper", version, about = "Deeper daily-routine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time-of-day gate
    Gate {
        #[command(subcommand)]
        action: commands::gate::GateAction,
    },
    /// Morning/evening routines
    Routine {
        #[command(subcommand)]
        action: commands::routine::RoutineAction,
    },
    /// Habit tracking and analytics
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Study session log
    Study {
        #[command(subcommand)]
        action: commands::study::StudyAction,
    },
    /// Journal entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Record export, import, backup, and reset
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Gate { action } => commands::gate::run(action),
        Commands::Routine { action } => commands::routine::run(action),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Study { action } => commands::study::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Data { action } => commands::data::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
