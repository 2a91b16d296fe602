/// A client-library capability a driver needs before it can connect.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Generic SQL client support.
    Sql,
    /// MySQL-family client support.
    MySql,
}

/// Answers whether a client capability is available in this environment.
///
/// The production probe (in `dbridge_drivers`) reports compiled cargo
/// features; tests may inject a probe with any answers. Pure query, no
/// side effects.
pub trait CapabilityProbe {
    fn has(&self, capability: Capability) -> bool;
}
