//! Run the checker over Eask-files

use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::external::{flag_if, flag_with, EmacsBackend};

#[derive(Args)]
pub struct CheckEaskArgs {
    /// Specify Eask-files for checker to lint
    pub files: Vec<String>,

    /// Output result to a file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Output lint result in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: CheckEaskArgs, backend: &EmacsBackend, output: &Output) -> Result<i32> {
    let mut forwarded = args.files;
    forwarded.extend(flag_if(args.json, "--json"));
    forwarded.extend(flag_with(args.output.as_deref(), "--output"));
    backend.call("checker/check-eask", forwarded, output).await
}
