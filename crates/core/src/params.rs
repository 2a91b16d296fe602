use core::fmt::{Display, Formatter, Result};

use typed_builder::TypedBuilder;

/// Character set forced on every session.
pub const CHARSET: &str = "utf8";

/// Parameters for a single connection attempt.
///
/// Constructed per attempt and discarded after use. All strings default to
/// empty; `port` defaults to `0`, which selects the driver's default port.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct ConnectParams {
    /// Server hostname or IP address.
    #[builder(default)]
    pub host: String,
    /// Username for login.
    #[builder(default)]
    pub username: String,
    /// Password for login.
    #[builder(default)]
    pub password: String,
    /// Database (schema) to use. Empty means no default schema.
    #[builder(default)]
    pub database: String,
    /// TCP port. `0` selects the driver's default port.
    #[builder(default)]
    pub port: u16,
}

/// Connection descriptor: scheme, endpoint, database and charset.
///
/// Derived from [`ConnectParams`] by a driver. Never carries credentials,
/// so it is safe to log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dsn {
    /// Protocol scheme, e.g. `mysql`.
    pub scheme: &'static str,
    pub host: String,
    /// Resolved port: the caller's port, or the driver default if the
    /// caller left it at `0`.
    pub port: u16,
    pub database: String,
    pub charset: &'static str,
}

impl Dsn {
    /// Build a descriptor from connection parameters, substituting
    /// `default_port` when the caller's port is `0`.
    #[must_use]
    pub fn new(scheme: &'static str, params: &ConnectParams, default_port: u16) -> Self {
        let port = if params.port == 0 {
            default_port
        } else {
            params.port
        };
        Self {
            scheme,
            host: params.host.clone(),
            port,
            database: params.database.clone(),
            charset: CHARSET,
        }
    }
}

impl Display for Dsn {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}://{}:{}/{}?charset={}",
            self.scheme, self.host, self.port, self.database, self.charset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{ConnectParams, Dsn, CHARSET};

    fn params(port: u16) -> ConnectParams {
        ConnectParams::builder()
            .host("localhost".to_owned())
            .username("root".to_owned())
            .password("x".to_owned())
            .database("app".to_owned())
            .port(port)
            .build()
    }

    #[test]
    fn zero_port_resolves_to_driver_default() {
        let dsn = Dsn::new("mysql", &params(0), 3306);
        assert_eq!(dsn.port, 3306);
    }

    #[test]
    fn explicit_port_passes_through() {
        let dsn = Dsn::new("mysql", &params(3307), 3306);
        assert_eq!(dsn.port, 3307);
    }

    #[test]
    fn descriptor_carries_fixed_charset() {
        let dsn = Dsn::new("mysql", &params(0), 3306);
        assert_eq!(dsn.charset, CHARSET);
    }

    #[test]
    fn display_renders_scheme_endpoint_and_charset() {
        let dsn = Dsn::new("mysql", &params(0), 3306);
        assert_eq!(dsn.to_string(), "mysql://localhost:3306/app?charset=utf8");
    }

    #[test]
    fn unset_fields_default_to_empty() {
        let params = ConnectParams::builder().build();
        assert!(params.host.is_empty());
        assert!(params.username.is_empty());
        assert!(params.password.is_empty());
        assert!(params.database.is_empty());
        assert_eq!(params.port, 0);
    }
}
