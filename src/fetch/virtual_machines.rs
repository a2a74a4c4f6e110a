use crate::fetch::FetchError;
use crate::fetch::ResourceFetcher;
use crate::model::VirtualMachineRecord;
use crate::model::resource_group_from_id;
use async_trait::async_trait;
use azure_core::auth::TokenCredential;
use azure_mgmt_compute::models::VirtualMachine;
use azure_mgmt_compute::models::hardware_profile;
use futures::StreamExt;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Fetches virtual machines through the ARM compute API.
pub struct VirtualMachineFetcher {
    subscription_id: String,
    credential: Arc<dyn TokenCredential>,
}

impl VirtualMachineFetcher {
    pub fn new(subscription_id: impl Into<String>, credential: Arc<dyn TokenCredential>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            credential,
        }
    }

    // One client per operation; the fetcher itself holds no connection state.
    fn client(&self) -> Result<azure_mgmt_compute::Client, FetchError> {
        azure_mgmt_compute::Client::builder(self.credential.clone())
            .build()
            .map_err(FetchError::ClientUnavailable)
    }
}

#[async_trait]
impl ResourceFetcher for VirtualMachineFetcher {
    type Record = VirtualMachineRecord;

    async fn list(&self, resource_group: Option<&str>) -> Result<Vec<VirtualMachineRecord>, FetchError> {
        let machines = self.client()?.virtual_machines_client();
        let mut pages = match resource_group {
            Some(group) => machines.list(group, self.subscription_id.as_str()).into_stream(),
            None => machines.list_all(self.subscription_id.as_str()).into_stream(),
        };
        let mut records = Vec::new();
        while let Some(page) = pages.next().await {
            for machine in page?.value {
                records.push(to_record(&machine)?);
            }
        }
        debug!(count = records.len(), "listed virtual machines");
        Ok(records)
    }

    async fn get(&self, name: &str, resource_group: &str) -> Result<VirtualMachineRecord, FetchError> {
        let machine = self
            .client()?
            .virtual_machines_client()
            .get(resource_group, name, self.subscription_id.as_str())
            .await?;
        to_record(&machine)
    }
}

fn to_record(machine: &VirtualMachine) -> Result<VirtualMachineRecord, FetchError> {
    let name = machine
        .resource
        .name
        .clone()
        .ok_or(FetchError::IncompleteResource("name"))?;
    let id = machine
        .resource
        .id
        .clone()
        .ok_or(FetchError::IncompleteResource("id"))?;
    let resource_group = resource_group_from_id(&id)
        .ok_or_else(|| FetchError::MalformedResourceId(id.clone()))?
        .to_owned();
    let vm_size = machine
        .properties
        .as_ref()
        .and_then(|properties| properties.hardware_profile.as_ref())
        .and_then(|profile| profile.vm_size.as_ref())
        .and_then(size_name);
    Ok(VirtualMachineRecord {
        name,
        id,
        location: machine.resource.location.clone(),
        vm_size,
        resource_group,
        tags: machine.resource.tags.as_ref().and_then(tag_map),
    })
}

// The generated size type is an open enum; serde hands back its wire name.
fn size_name(size: &hardware_profile::VmSize) -> Option<String> {
    match serde_json::to_value(size) {
        Ok(serde_json::Value::String(name)) => Some(name),
        _ => None,
    }
}

fn tag_map(tags: &serde_json::Value) -> Option<BTreeMap<String, String>> {
    let entries = tags.as_object()?;
    Some(
        entries
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    serde_json::Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect(),
    )
}
