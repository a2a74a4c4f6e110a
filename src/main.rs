mod auth;
mod cli;
mod fetch;
mod model;

use crate::cli::Cli;
use clap::Parser;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(cli.global_args.env_filter())
        .with_writer(std::io::stderr)
        .init();
    cli.command.invoke()
}
