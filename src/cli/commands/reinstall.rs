//! Reinstall packages in the current workspace

use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::external::EmacsBackend;

#[derive(Args)]
pub struct ReinstallArgs {
    /// Packages to reinstall
    pub names: Vec<String>,
}

pub async fn execute(args: ReinstallArgs, backend: &EmacsBackend, output: &Output) -> Result<i32> {
    backend.call("core/reinstall", args.names, output).await
}
