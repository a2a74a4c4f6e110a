use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

use crate::cli::to_args::ToArgs;

#[derive(Args, Default, Arbitrary, PartialEq, Debug)]
pub struct GlobalArgs {
    /// Enable debug logging
    #[clap(long, global = true)]
    pub debug: bool,
}

impl GlobalArgs {
    /// Filter for the fmt subscriber; `RUST_LOG` wins over `--debug`.
    pub fn env_filter(&self) -> EnvFilter {
        let fallback = if self.debug { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }
}

impl ToArgs for GlobalArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if self.debug {
            args.push("--debug".into());
        }
        args
    }
}
