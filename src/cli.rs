//! CLI definitions and entry point

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use secuchat_terms::output::{DecisionResult, OutputMode};
use secuchat_terms::prompt::prompt_acceptance;
use secuchat_terms::screen::clear_screen;

/// secuchat-terms - Usage-agreement gate for Secuchat-CLI
#[derive(Parser, Debug)]
#[command(
    name = "secuchat-terms",
    version,
    about = "Usage-agreement gate for Secuchat-CLI",
    long_about = "Show the Secuchat-CLI usage agreement and ask whether you accept it.\n\n\
                  Exits with status 0 when the terms are accepted and 1 when they are not."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the final status in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    clear_screen();

    let decision = {
        let mut input = io::stdin().lock();
        let mut output = io::stdout().lock();
        prompt_acceptance(&mut input, &mut output).context("failed to read acceptance")?
    };

    DecisionResult::from(decision).render(output_mode);

    Ok(decision.into())
}
