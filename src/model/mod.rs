pub mod virtual_machine;

pub use virtual_machine::VirtualMachineRecord;
pub use virtual_machine::resource_group_from_id;
