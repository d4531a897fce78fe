//! planrec CLI Application
//!
//! Command-line front end for saving planner output and inspecting
//! failed-plan traces.

mod args;
mod catalog;
mod cli;
mod renderer;

use std::process::ExitCode;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::error;
use planrec_core::PlanRecError;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("Error: {err:#}");
            exit_code(&err)
        }
    }
}

fn run() -> Result<()> {
    let Args { no_color, command } = Args::parse();
    let cli = Cli::new(TerminalRenderer::new(!no_color));

    match command {
        Save(args) => cli.save(args),
        Cost(args) => cli.cost(args),
        FailedPlans(args) => cli.failed_plans(args),
    }
}

/// Input/output errors from the core keep their designated status.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<PlanRecError>() {
        Some(err) => ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1)),
        None => ExitCode::FAILURE,
    }
}
