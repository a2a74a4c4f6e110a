use crate::auth::CredentialMode;
use crate::cli::to_args::ToArgs;
use crate::fetch::ResourceFetcher;
use crate::fetch::virtual_machines::VirtualMachineFetcher;
use crate::model::VirtualMachineRecord;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;
use std::io::Write;
use tokio::runtime::Builder;

/// List virtual machines in a subscription
#[derive(Args, Clone, Arbitrary, PartialEq, Debug)]
pub struct ListVmsArgs {
    /// Subscription holding the machines
    pub subscription_id: String,
    /// Restrict the listing to one resource group
    pub resource_group: Option<String>,
    /// Credential mode: default, managed, cli, or service_principal
    #[clap(long, default_value = "default")]
    pub auth_mode: CredentialMode,
}

impl ListVmsArgs {
    pub fn invoke(self) -> eyre::Result<()> {
        Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(async {
                let credential = self.auth_mode.resolve()?;
                let fetcher = VirtualMachineFetcher::new(self.subscription_id, credential);
                let stdout = std::io::stdout();
                list_and_print(&fetcher, self.resource_group.as_deref(), &mut stdout.lock()).await
            })
    }
}

pub(crate) async fn list_and_print<F>(
    fetcher: &F,
    resource_group: Option<&str>,
    out: &mut dyn Write,
) -> eyre::Result<()>
where
    F: ResourceFetcher<Record = VirtualMachineRecord>,
{
    for machine in fetcher.list(resource_group).await? {
        writeln!(out, "{}", serde_json::to_string_pretty(&machine)?)?;
    }
    eyre::Ok(())
}

impl ToArgs for ListVmsArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![self.subscription_id.clone().into()];
        if let Some(resource_group) = &self.resource_group {
            args.push(resource_group.clone().into());
        }
        args.push("--auth-mode".into());
        args.push(self.auth_mode.name().into());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::stubs::OneMachine;

    #[tokio::test]
    async fn prints_the_machines_the_fetcher_returns() {
        let mut out = Vec::new();
        list_and_print(&OneMachine, None, &mut out).await.unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("vm1"));
        assert!(printed.contains("Standard_DS1_v2"));
    }

    #[tokio::test]
    async fn scoped_listing_also_prints_records() {
        let mut out = Vec::new();
        list_and_print(&OneMachine, Some("rg"), &mut out).await.unwrap();
        assert!(String::from_utf8(out).unwrap().contains("vm1"));
    }
}
