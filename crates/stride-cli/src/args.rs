//! Command-line interface definitions using clap
//!
//! CLI argument structures stay here with their clap derives; the core
//! crate never sees them. Flag-driven commands carry a [`ProgramArgs`],
//! which is fed through the same wizard controller the interactive mode
//! uses.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Terminal front-end for the Stride program builder
///
/// Build training programs step by step, either interactively or from
/// flags, and submit them to the program API or a local outbox file.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Base URL of the program API. When omitted, programs are written to
    /// the local outbox file instead.
    #[arg(long, global = true, env = "STRIDE_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token sent to the program API
    #[arg(long, global = true, env = "STRIDE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Identifier of the coach creating the program
    #[arg(long, global = true, env = "STRIDE_USER_ID")]
    pub user_id: Option<String>,

    /// Path to the local outbox file. Defaults to
    /// $XDG_DATA_HOME/stride/programs.json
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Stride CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build a program interactively, one step at a time
    #[command(alias = "n")]
    New,
    /// Build and submit a program from flags
    #[command(alias = "c")]
    Create(ProgramArgs),
    /// Show the request a set of flags would submit, without submitting
    #[command(alias = "p")]
    Preview(ProgramArgs),
    /// Print the JSON schema of the create-program request
    Schema,
}

/// A training phase given on the command line as `NAME:START-END`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseArg {
    pub name: String,
    pub start: String,
    pub end: String,
}

fn parse_phase(value: &str) -> Result<PhaseArg, String> {
    let (name, range) = value
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:START-END, got '{value}'"))?;
    let (start, end) = range
        .split_once('-')
        .ok_or_else(|| format!("expected a week range like 1-4, got '{range}'"))?;

    if name.trim().is_empty() {
        return Err("phase name must not be empty".to_string());
    }

    Ok(PhaseArg {
        name: name.trim().to_string(),
        start: start.trim().to_string(),
        end: end.trim().to_string(),
    })
}

/// Program contents supplied as flags
#[derive(ClapArgs, Debug, Clone)]
pub struct ProgramArgs {
    /// Name of the program
    pub name: String,

    /// Program type tag; repeat for several (e.g. --type Strength --type Cardio)
    #[arg(short = 't', long = "type")]
    pub types: Vec<String>,

    /// Program length in weeks (1-52)
    #[arg(short, long, default_value = "4")]
    pub weeks: String,

    /// Bundle a nutrition program
    #[arg(long)]
    pub nutrition: bool,

    /// Make the program visible to everyone
    #[arg(long)]
    pub public: bool,

    /// Training phase as NAME:START-END; repeat in order. The first phase
    /// replaces the default "Phase 1".
    #[arg(long = "phase", value_parser = parse_phase)]
    pub phases: Vec<PhaseArg>,
}
