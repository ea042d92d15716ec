//! Command-line interface for the eask CLI
//!
//! This module provides the main CLI structure and command handling.
//! It uses clap for argument parsing; every subcommand shares the global
//! options declared here, which the Emacs backend forwards to the Elisp
//! side as command-line flags.

use anyhow::Result;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

use crate::external::EmacsBackend;

/// Eask - package development tooling for Emacs Lisp
#[derive(Parser)]
#[command(name = "eask", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub globals: GlobalOpts,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every subcommand and forwarded to the backend
#[derive(Args, Clone, Default)]
pub struct GlobalOpts {
    /// Change the default workspace to ~/.eask/
    #[arg(short = 'g', long, global = true)]
    pub global: bool,

    /// Enable the all flag
    #[arg(short = 'a', long, global = true)]
    pub all: bool,

    /// Start cleanly without loading the workspace configuration
    #[arg(short = 'q', long, global = true)]
    pub quick: bool,

    /// Enable the force flag
    #[arg(short = 'f', long, global = true)]
    pub force: bool,

    /// Turn on debug mode
    #[arg(long, global = true)]
    pub debug: bool,

    /// Report warnings as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// Continue the execution even when an error is reported
    #[arg(long, global = true)]
    pub allow_error: bool,

    /// Allow connections over insecure channels
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Log with timestamps
    #[arg(long, global = true)]
    pub timestamps: bool,

    /// Set the backend log level
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase verbosity (repeatable)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emacs executable to run the backend with
    #[arg(long, value_name = "PATH", env = "EASK_EMACS", global = true)]
    pub emacs: Option<String>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run eask checker
    CheckEask(commands::check_eask::CheckEaskArgs),
    /// Reinstall packages
    Reinstall(commands::reinstall::ReinstallArgs),
}

impl Cli {
    /// Execute the CLI command, returning the backend exit code
    pub async fn run(self, output: &Output) -> Result<i32> {
        match self.command {
            Some(command) => {
                let backend = EmacsBackend::locate(&self.globals)?;
                match command {
                    Commands::CheckEask(args) => {
                        commands::check_eask::execute(args, &backend, output).await
                    }
                    Commands::Reinstall(args) => {
                        commands::reinstall::execute(args, &backend, output).await
                    }
                }
            }
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(0)
            }
        }
    }
}
