//! # Eask CLI
//!
//! A Rust front-end for Eask, the package-development tool for Emacs Lisp.
//! The `eask` binary parses the command surface and delegates the real work
//! to an Emacs subprocess running the Elisp backend script that backs each
//! subcommand.
//!
//! ## Quick Start
//!
//! ```bash
//! # Lint the Eask-file of the current workspace
//! eask check-eask
//!
//! # Lint specific Eask-files, result as JSON
//! eask check-eask Eask lisp/Eask --json
//!
//! # Reinstall packages
//! eask reinstall dash magit
//! ```

pub mod cli;
pub mod external;

pub use cli::{Cli, Output};
pub use external::EmacsBackend;

/// Result type alias for Eask CLI operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
