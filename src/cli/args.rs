use clap::{Args, Parser, Subcommand};

use crate::assistant::score::ContextScore;

#[derive(Parser, Debug)]
#[command(name = "deepcheck", version, about = "Forensic assistant console for deepfake credibility questions", propagate_version = true)]
pub struct Cli {
    /// One-shot question
    pub prompt: Vec<String>,

    #[command(flatten)]
    pub io: IoArgs,

    #[command(flatten)]
    pub runtime: RuntimeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Default)]
pub struct IoArgs {
    /// Read the question from a file
    #[arg(short = 'f', long = "file", global = true)]
    pub input_file: Option<String>,

    /// Write the forensic log to a file after the exchange
    #[arg(short = 'o', long = "output", global = true)]
    pub output_file: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct RuntimeArgs {
    /// Override provider for this run
    #[arg(long = "provider", global = true)]
    pub provider: Option<String>,

    /// Override model for this run
    #[arg(long = "model", global = true)]
    pub model: Option<String>,

    /// Deepfake probability (0-100) given to the assistant as context
    #[arg(long = "score", global = true)]
    pub score: Option<ContextScore>,

    /// Explicit config file path
    #[arg(long = "config", global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive chat console
    Interactive,

    /// Config management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize default config file (~/.deepcheck/config.toml)
    Init {
        /// Overwrite if exists
        #[arg(long)]
        force: bool,
        /// Scope to create config: user or project (default: user)
        #[arg(long, value_parser = ["user", "project"])]
        scope: Option<String>,
    },
    /// Set one of: provider, api-key, model, base-url, temperature
    Set { key: String, value: String },
    List,
}
