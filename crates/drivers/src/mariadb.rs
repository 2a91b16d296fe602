//! MariaDB driver.
//!
//! MariaDB speaks the MySQL client protocol, so connection establishment
//! reuses the MySQL option assembly under a `mariadb` scheme.

use mysql::Conn;

use dbridge_core::capability::{Capability, CapabilityProbe};
use dbridge_core::driver::Driver;
use dbridge_core::error::ConnectError;
use dbridge_core::params::ConnectParams;

pub(crate) const SCHEME: &str = "mariadb";

/// Connection factory for MariaDB servers.
#[derive(Clone, Copy, Debug, Default)]
pub struct MariaDbDriver;

impl Driver for MariaDbDriver {
    type Handle = Conn;

    fn driver_name(&self) -> &'static str {
        "MariaDB"
    }

    fn is_supported(&self, probe: &dyn CapabilityProbe) -> bool {
        probe.has(Capability::Sql) && probe.has(Capability::MySql)
    }

    fn connect(&self, params: &ConnectParams) -> Result<Conn, ConnectError> {
        crate::mysql::open_connection(SCHEME, params)
    }
}
