use anyhow::Result;
use clap::Parser;
use diskgauge::cli::{Cli, Commands};
use diskgauge::commands::{self, HealthConfig, PerfConfig};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(command_verbosity(&cli.command));

    match cli.command {
        Commands::Health {
            device,
            format,
            output,
            plain,
            smartctl_path,
            verbosity: _,
        } => commands::handle_health(HealthConfig {
            device,
            format,
            output,
            plain,
            smartctl_path,
        }),
        Commands::Perf {
            device,
            format,
            output,
            plain,
            smartctl_path,
            verbosity: _,
        } => commands::handle_perf(PerfConfig {
            device,
            format,
            output,
            plain,
            smartctl_path,
        }),
        Commands::List => commands::handle_list(),
        Commands::Init { force } => commands::init_config(force),
    }
}

fn command_verbosity(command: &Commands) -> u8 {
    match command {
        Commands::Health { verbosity, .. } | Commands::Perf { verbosity, .. } => *verbosity,
        _ => 0,
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
