//! Command implementations for the eask CLI
//!
//! Each subcommand declares its arguments in its own module and forwards
//! them to the Emacs backend. The heavy lifting happens on the Elisp side.

pub mod check_eask;
pub mod reinstall;
