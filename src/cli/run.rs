//! Dispatch parsed arguments to a command handler.
//!
//! Without a subcommand the inputs are extracted.
use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init},
};
use crate::core::SystemClock;

pub fn run(Arguments { command, extract: args }: Arguments) -> Result<CommandResult> {
    let work_dir = env::current_dir().context("Failed to determine current directory")?;
    match command {
        Some(Command::Init) => init(&work_dir),
        None => extract(&args, &work_dir, &SystemClock),
    }
}
