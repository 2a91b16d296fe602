use dbridge_core::capability::{Capability, CapabilityProbe};

/// Capability probe backed by the cargo features compiled into this build.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompiledProbe;

impl CapabilityProbe for CompiledProbe {
    fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Sql => true,
            Capability::MySql => cfg!(feature = "mysql"),
        }
    }
}
