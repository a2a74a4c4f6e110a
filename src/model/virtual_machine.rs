use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// One virtual machine, flattened out of the management API's nested shape.
///
/// ARM does not report the resource group as its own field; it is encoded as
/// a path segment of the resource id and recovered by
/// [`resource_group_from_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualMachineRecord {
    pub name: String,
    /// Fully-qualified resource id,
    /// `/subscriptions/{sub}/resourceGroups/{group}/providers/...`.
    pub id: String,
    pub location: String,
    pub vm_size: Option<String>,
    pub resource_group: String,
    pub tags: Option<BTreeMap<String, String>>,
}

/// Extract the resource group from a fully-qualified resource id.
///
/// The group is the fifth `/`-delimited segment. Ids that are too short, or
/// whose marker segment is not `resourceGroups`, yield `None` rather than a
/// wrong answer.
pub fn resource_group_from_id(id: &str) -> Option<&str> {
    let mut segments = id.split('/');
    if segments.next() != Some("") {
        return None;
    }
    if !segments.next()?.eq_ignore_ascii_case("subscriptions") {
        return None;
    }
    segments.next()?;
    if !segments.next()?.eq_ignore_ascii_case("resourcegroups") {
        return None;
    }
    let group = segments.next()?;
    (!group.is_empty()).then_some(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VM_ID: &str =
        "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Compute/virtualMachines/vm1";

    #[test]
    fn resource_group_is_the_fifth_path_segment() {
        assert_eq!(resource_group_from_id(VM_ID), Some("rg"));
    }

    #[test]
    fn marker_segment_is_matched_case_insensitively() {
        let id = "/subscriptions/sub/resourcegroups/rg/providers/x/y/z";
        assert_eq!(resource_group_from_id(id), Some("rg"));
    }

    #[test]
    fn short_or_misshapen_ids_are_rejected() {
        assert_eq!(resource_group_from_id(""), None);
        assert_eq!(resource_group_from_id("/subscriptions/sub"), None);
        assert_eq!(resource_group_from_id("/subscriptions/sub/resourceGroups/"), None);
        assert_eq!(resource_group_from_id("/tenants/t/resourceGroups/rg/x"), None);
        assert_eq!(resource_group_from_id("subscriptions/sub/resourceGroups/rg/x"), None);
    }

    #[test]
    fn serializes_in_the_documented_field_order() {
        let record = VirtualMachineRecord {
            name: "vm1".into(),
            id: VM_ID.into(),
            location: "eastus".into(),
            vm_size: Some("Standard_DS1_v2".into()),
            resource_group: "rg".into(),
            tags: Some(BTreeMap::from([("env".to_owned(), "test".to_owned())])),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            format!(
                r#"{{"name":"vm1","id":"{VM_ID}","location":"eastus","vm_size":"Standard_DS1_v2","resource_group":"rg","tags":{{"env":"test"}}}}"#
            )
        );
    }

    #[test]
    fn absent_size_and_tags_serialize_as_null() {
        let record = VirtualMachineRecord {
            name: "vm1".into(),
            id: VM_ID.into(),
            location: "eastus".into(),
            vm_size: None,
            resource_group: "rg".into(),
            tags: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""vm_size":null"#));
        assert!(json.contains(r#""tags":null"#));
    }
}
