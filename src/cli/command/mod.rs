pub mod get_vm;
pub mod list_vms;

use crate::cli::command::get_vm::GetVmArgs;
use crate::cli::command::list_vms::ListVmsArgs;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Subcommand;
use std::ffi::OsString;

/// Inventory operations against one Azure subscription
#[derive(Subcommand, Arbitrary, PartialEq, Debug)]
pub enum Command {
    /// List virtual machines in a subscription
    ListVms(ListVmsArgs),
    /// Fetch a single virtual machine by name
    GetVm(GetVmArgs),
}

impl Command {
    pub fn invoke(self) -> eyre::Result<()> {
        match self {
            Command::ListVms(args) => args.invoke(),
            Command::GetVm(args) => args.invoke(),
        }
    }
}

impl ToArgs for Command {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        match self {
            Command::ListVms(list_args) => {
                args.push("list-vms".into());
                args.extend(list_args.to_args());
            }
            Command::GetVm(get_args) => {
                args.push("get-vm".into());
                args.extend(get_args.to_args());
            }
        }
        args
    }
}
