//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagstack")]
#[command(about = "Build balanced markup from tag scripts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: $TAGSTACK_CONFIG or ./tagstack.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a script, or every script in a directory
    Render {
        /// Script file or directory of scripts
        input: PathBuf,

        /// Output file (default: stdout; ignored for directories)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Close mode (auto, manual), overriding script and config
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// List the tags available to scripts
    Tags,
}
