//! Command implementations for amur.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod app;
mod features;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::App(args) => app::cmd_app(args),
        Command::Features => features::cmd_features(),
    }
}
