//! Integration with external processes
//!
//! The only external collaborator is Emacs itself, which executes the
//! Elisp backend scripts on behalf of the CLI.

pub mod emacs;

pub use emacs::{flag_if, flag_with, EmacsBackend};
