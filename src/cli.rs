use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Animated gauge with a progress bar
    Terminal,
    /// Machine-readable report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "diskgauge")]
#[command(about = "Disk diagnostics: SMART health and performance scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score drive health from its SMART report
    Health {
        /// Device to score (e.g. /dev/sda); prompts when omitted
        device: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file for json format (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable the animation and color
        #[arg(long)]
        plain: bool,

        /// Path to the smartctl binary
        #[arg(long = "smartctl-path", env = "DISKGAUGE_SMARTCTL")]
        smartctl_path: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Score drive performance from its SMART report
    Perf {
        /// Device to score (e.g. /dev/sda); prompts when omitted
        device: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file for json format (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable the animation and color
        #[arg(long)]
        plain: bool,

        /// Path to the smartctl binary
        #[arg(long = "smartctl-path", env = "DISKGAUGE_SMARTCTL")]
        smartctl_path: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// List detected block devices
    List,

    /// Initialize a .diskgauge.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
