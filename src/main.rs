use clap::Parser;
use tracing_subscriber::EnvFilter;

use eask_cli::cli::{Cli, Output};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if cli.globals.no_color || !atty::is(atty::Stream::Stdout) {
        console::set_colors_enabled(false);
    }

    let output = Output::new(cli.globals.verbose > 0);

    match cli.run(&output).await {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(err) => {
            output.error(&format!("{err:#}"));
            std::process::exit(1);
        }
    }
}
