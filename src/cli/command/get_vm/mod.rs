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

/// Fetch a single virtual machine by name
#[derive(Args, Clone, Arbitrary, PartialEq, Debug)]
pub struct GetVmArgs {
    /// Subscription holding the machine
    pub subscription_id: String,
    /// Machine name
    pub vm_name: String,
    /// Resource group the machine lives in
    pub resource_group: String,
    /// Credential mode: default, managed, cli, or service_principal
    #[clap(long, default_value = "default")]
    pub auth_mode: CredentialMode,
}

impl GetVmArgs {
    pub fn invoke(self) -> eyre::Result<()> {
        Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(async {
                let credential = self.auth_mode.resolve()?;
                let fetcher = VirtualMachineFetcher::new(self.subscription_id, credential);
                let stdout = std::io::stdout();
                get_and_print(&fetcher, &self.vm_name, &self.resource_group, &mut stdout.lock())
                    .await
            })
    }
}

pub(crate) async fn get_and_print<F>(
    fetcher: &F,
    vm_name: &str,
    resource_group: &str,
    out: &mut dyn Write,
) -> eyre::Result<()>
where
    F: ResourceFetcher<Record = VirtualMachineRecord>,
{
    let machine = fetcher.get(vm_name, resource_group).await?;
    writeln!(out, "{}", serde_json::to_string_pretty(&machine)?)?;
    eyre::Ok(())
}

impl ToArgs for GetVmArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            self.subscription_id.clone().into(),
            self.vm_name.clone().into(),
            self.resource_group.clone().into(),
        ];
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
    async fn prints_the_requested_machine() {
        let mut out = Vec::new();
        get_and_print(&OneMachine, "vm1", "rg", &mut out).await.unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("vm1"));
        assert!(printed.contains("eastus"));
    }
}
