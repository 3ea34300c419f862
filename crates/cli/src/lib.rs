use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "artistd.yaml";

#[derive(Parser, Debug)]
#[command(name = "artistd")]
#[command(about = "Artist catalog REST service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP service
    Start {
        /// Path to the configuration file (defaults apply when absent)
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Override HTTP port
        #[arg(long)]
        http: Option<u16>,

        /// Override bind host
        #[arg(long)]
        host: Option<String>,

        /// Insert the default catalog before serving
        #[arg(long)]
        seed: bool,
    },

    /// Validate configuration without starting the service
    Validate {
        /// Path to the configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Write a configuration file with all defaults
    Init {
        /// Output path for the new configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        output: PathBuf,
    },

    /// Insert the default catalog into the configured store
    Seed {
        /// Path to the configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
