pub mod command;
pub mod global_args;
pub mod to_args;

use crate::cli::command::Command;
use crate::cli::global_args::GlobalArgs;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Parser;
use std::ffi::OsString;

/// Inventory Azure virtual machines from the command line
#[derive(Parser, Arbitrary, PartialEq, Debug)]
#[clap(name = "azure-vm-inventory", version)]
pub struct Cli {
    #[clap(flatten)]
    pub global_args: GlobalArgs,
    #[clap(subcommand)]
    pub command: Command,
}

impl ToArgs for Cli {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = self.global_args.to_args();
        args.extend(self.command.to_args());
        args
    }
}
