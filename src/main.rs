use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use deepcheck::cli::args::{Cli, Commands, ConfigAction};
use deepcheck::cli::commands;
use deepcheck::config::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config_path = cli.runtime.config.as_ref().map(PathBuf::from);
    let config_path = config_path.as_deref();

    match &cli.command {
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { force, scope } => {
                commands::handle_config_init(*force, scope.as_deref(), config_path)?
            }
            ConfigAction::List => commands::handle_config_list(&Settings::load(config_path)?)?,
            ConfigAction::Set { key, value } => {
                let mut settings = Settings::load(config_path)?;
                commands::handle_config_set(&mut settings, key, value, config_path)?
            }
        },
        Some(Commands::Interactive) => {
            let settings = Settings::load(config_path)?;
            commands::handle_interactive(&settings, &cli.runtime).await?
        }
        None => {
            if !cli.prompt.is_empty() || cli.io.input_file.is_some() {
                let settings = Settings::load(config_path)?;
                let prompt = Some(cli.prompt.join(" ")).filter(|p| !p.is_empty());
                commands::handle_ask(&settings, prompt, &cli.runtime, &cli.io).await?
            } else {
                // No command and no prompt: show help
                Cli::command().print_help()?;
                println!();
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
