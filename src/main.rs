use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use mvsim::cli::{Cli, Commands};
use mvsim::commands::{self, SimulateConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(verbosity_of(&cli.command));

    match cli.command {
        Commands::Simulate {
            config,
            overrides,
            format,
            output,
            plain,
            verbosity: _,
        } => commands::simulate(SimulateConfig {
            config,
            overrides,
            format,
            output,
            plain,
        }),
        Commands::Validate {
            config,
            verbosity: _,
        } => commands::validate_configuration(config),
        Commands::Init { force, format } => commands::init_config(force, format),
        Commands::Formulas => commands::print_formulas(),
    }
}

fn verbosity_of(command: &Commands) -> u8 {
    match command {
        Commands::Simulate { verbosity, .. } | Commands::Validate { verbosity, .. } => *verbosity,
        Commands::Init { .. } | Commands::Formulas => 0,
    }
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// RUST_LOG, when set, takes precedence over -v flags
fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbosity));
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.format_timestamp(None).init();
}
