//! Stride CLI Application
//!
//! Command-line front-end for the Stride program builder.

mod args;
mod cli;
mod prompt;
mod renderer;
mod services;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use services::{default_data_file, HttpProgramService, OutboxProgramService, TerminalNavigator};
use stride_core::{ProgramService, StaticIdentity, WizardBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_url,
        token,
        user_id,
        data_file,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    if let Some(Commands::Schema) = command {
        return Cli::schema(&renderer);
    }

    let service: Arc<dyn ProgramService> = match api_url {
        Some(url) => {
            info!("Submitting programs to {url}");
            Arc::new(HttpProgramService::new(&url, token))
        }
        None => {
            let path = match data_file {
                Some(path) => path,
                None => default_data_file()?,
            };
            info!("Writing programs to {}", path.display());
            Arc::new(OutboxProgramService::new(path))
        }
    };

    let navigator = Arc::new(TerminalNavigator::default());
    let wizard = WizardBuilder::new()
        .with_service(service)
        .with_identity(Arc::new(StaticIdentity(user_id)))
        .with_navigator(navigator.clone())
        .build()
        .context("Failed to initialize the program builder")?;

    let cli = Cli::new(wizard, navigator, renderer);

    match command {
        Some(Commands::Create(program)) => cli.create(&program).await,
        Some(Commands::Preview(program)) => cli.preview(&program).await,
        Some(Commands::New) | Some(Commands::Schema) | None => cli.run_interactive().await,
    }
}
