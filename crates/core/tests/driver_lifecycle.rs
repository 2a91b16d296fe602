use std::error::Error;
use std::io;

use dbridge_core::capability::{Capability, CapabilityProbe};
use dbridge_core::driver::{open, Driver};
use dbridge_core::error::{ConnectError, DriverErrorInfo};
use dbridge_core::params::ConnectParams;

/// Probe with fixed answers, standing in for the compiled-feature probe.
struct StaticProbe {
    sql: bool,
    mysql: bool,
}

impl CapabilityProbe for StaticProbe {
    fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Sql => self.sql,
            Capability::MySql => self.mysql,
        }
    }
}

/// Driver whose connect always succeeds with a sentinel handle.
struct OkDriver;

impl Driver for OkDriver {
    type Handle = u32;

    fn driver_name(&self) -> &'static str {
        "Ok"
    }

    fn is_supported(&self, probe: &dyn CapabilityProbe) -> bool {
        probe.has(Capability::Sql) && probe.has(Capability::MySql)
    }

    fn connect(&self, _params: &ConnectParams) -> Result<Self::Handle, ConnectError> {
        Ok(7)
    }
}

/// Driver whose connect always fails the way a client library would.
struct FailingDriver;

impl Driver for FailingDriver {
    type Handle = u32;

    fn driver_name(&self) -> &'static str {
        "Failing"
    }

    fn is_supported(&self, _probe: &dyn CapabilityProbe) -> bool {
        true
    }

    fn connect(&self, _params: &ConnectParams) -> Result<Self::Handle, ConnectError> {
        let info = DriverErrorInfo {
            sql_state: Some("08001".to_owned()),
            driver_code: Some(2002),
            driver_message: Some("server unreachable".to_owned()),
        };
        Err(
            ConnectError::new("server unreachable".to_owned(), 2002, info).with_source(
                io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
            ),
        )
    }
}

fn both() -> StaticProbe {
    StaticProbe {
        sql: true,
        mysql: true,
    }
}

#[test]
fn open_returns_handle_when_supported_and_connect_succeeds() {
    let handle = open(&OkDriver, &both(), &ConnectParams::default());
    assert_eq!(handle.expect("connect must succeed"), 7);
}

#[test]
fn support_requires_both_capabilities() {
    let cases = [
        (true, true, true),
        (true, false, false),
        (false, true, false),
        (false, false, false),
    ];
    for (sql, mysql, expected) in cases {
        let probe = StaticProbe { sql, mysql };
        assert_eq!(
            OkDriver.is_supported(&probe),
            expected,
            "sql={sql} mysql={mysql}",
        );
    }
}

#[test]
fn open_refuses_unsupported_driver_without_connecting() {
    let probe = StaticProbe {
        sql: true,
        mysql: false,
    };
    let err = open(&OkDriver, &probe, &ConnectParams::default())
        .expect_err("unsupported driver must not connect");
    assert_eq!(err.code, 0);
    assert_eq!(err.info, DriverErrorInfo::default());
    assert!(err.source().is_none());
    assert!(err.message.contains("Ok"));
}

#[test]
fn failure_fields_pass_through_the_lifecycle_unchanged() {
    let err = open(&FailingDriver, &both(), &ConnectParams::default())
        .expect_err("connect must fail");
    assert_eq!(err.message, "server unreachable");
    assert_eq!(err.code, 2002);
    assert_eq!(err.info.sql_state.as_deref(), Some("08001"));
    assert_eq!(err.info.driver_code, Some(2002));
    assert_eq!(err.info.driver_message.as_deref(), Some("server unreachable"));

    let source = err.source().expect("cause must be preserved");
    assert!(source.downcast_ref::<io::Error>().is_some());
}

#[test]
fn driver_name_is_constant() {
    assert_eq!(OkDriver.driver_name(), "Ok");
    assert_eq!(FailingDriver.driver_name(), "Failing");
}
