//! Database drivers for the dbridge connection layer.
//!
//! Each driver implements [`dbridge_core::Driver`] for one database engine:
//! it derives a connection descriptor from the caller's parameters, opens a
//! connection through a native client library, and translates any client
//! failure into the core [`ConnectError`](dbridge_core::error::ConnectError)
//! without losing information.
//!
//! [`probe::CompiledProbe`] is the production
//! [`CapabilityProbe`](dbridge_core::capability::CapabilityProbe): it
//! reports the client capabilities compiled into this build.
//!
//! # Crate features
//!
//! - **`mysql`** (default) -- the MySQL and MariaDB drivers, backed by the
//!   `mysql` client crate.

#[cfg(feature = "mysql")]
pub mod mariadb;
#[cfg(feature = "mysql")]
pub mod mysql;
pub mod probe;
