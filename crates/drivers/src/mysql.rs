//! MySQL driver, backed by the `mysql` client crate.

use mysql::{Conn, Opts, OptsBuilder};

use dbridge_core::capability::{Capability, CapabilityProbe};
use dbridge_core::driver::Driver;
use dbridge_core::error::{ConnectError, DriverErrorInfo};
use dbridge_core::params::{ConnectParams, Dsn};

/// Standard MySQL server port, used when the caller leaves the port at `0`.
pub const DEFAULT_PORT: u16 = 3306;

pub(crate) const SCHEME: &str = "mysql";

/// Connection factory for MySQL servers.
#[derive(Clone, Copy, Debug, Default)]
pub struct MySqlDriver;

impl Driver for MySqlDriver {
    type Handle = Conn;

    fn driver_name(&self) -> &'static str {
        "MySQL"
    }

    fn is_supported(&self, probe: &dyn CapabilityProbe) -> bool {
        probe.has(Capability::Sql) && probe.has(Capability::MySql)
    }

    fn connect(&self, params: &ConnectParams) -> Result<Conn, ConnectError> {
        open_connection(SCHEME, params)
    }
}

/// Everything a connect attempt will ask of the client library: the
/// resolved descriptor plus the session init commands.
///
/// Split out from the actual client call so option assembly is checkable
/// without a live server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectPlan {
    /// Resolved connection descriptor (port already defaulted).
    pub dsn: Dsn,
    /// Statements the client runs on every fresh session. Always contains
    /// the charset-forcing command.
    pub init_commands: Vec<String>,
}

/// Build the connect plan for a MySQL connection attempt.
#[must_use]
pub fn connection_plan(params: &ConnectParams) -> ConnectPlan {
    plan(SCHEME, params)
}

pub(crate) fn plan(scheme: &'static str, params: &ConnectParams) -> ConnectPlan {
    let dsn = Dsn::new(scheme, params, DEFAULT_PORT);
    let init_commands = vec![format!("SET NAMES {}", dsn.charset)];
    ConnectPlan { dsn, init_commands }
}

pub(crate) fn open_connection(
    scheme: &'static str,
    params: &ConnectParams,
) -> Result<Conn, ConnectError> {
    let plan = plan(scheme, params);
    tracing::debug!(dsn = %plan.dsn, "opening connection");
    Conn::new(client_opts(&plan, params)).map_err(translate_error)
}

/// Assemble client options from the plan and credentials. An empty
/// database name means no default schema.
fn client_opts(plan: &ConnectPlan, params: &ConnectParams) -> Opts {
    let database = (!params.database.is_empty()).then(|| params.database.clone());
    OptsBuilder::new()
        .ip_or_hostname(Some(plan.dsn.host.clone()))
        .tcp_port(plan.dsn.port)
        .user(Some(params.username.clone()))
        .pass(Some(params.password.clone()))
        .db_name(database)
        .init(plan.init_commands.clone())
        .into()
}

/// Translate a client failure into the core error, keeping every field.
///
/// Server failures carry a numeric code, an SQLSTATE and a server message;
/// transport failures (refused, unreachable, bad URL) carry none, so the
/// code is `0` and the diagnostics stay empty. Either way the original
/// client error becomes the cause.
fn translate_error(error: mysql::Error) -> ConnectError {
    let (code, info) = match &error {
        mysql::Error::MySqlError(server) => (
            u32::from(server.code),
            DriverErrorInfo {
                sql_state: Some(server.state.clone()),
                driver_code: Some(u32::from(server.code)),
                driver_message: Some(server.message.clone()),
            },
        ),
        _ => (0, DriverErrorInfo::default()),
    };
    ConnectError::new(error.to_string(), code, info).with_source(error)
}
