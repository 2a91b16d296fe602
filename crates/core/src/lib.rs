//! Abstract side of a pluggable database driver layer.
//!
//! `dbridge_core` defines what a database *driver* is, without committing to
//! any client library:
//!
//! - [`Driver`](driver::Driver) -- a swappable connection factory for one
//!   database engine, with three operations: `driver_name` (fixed engine
//!   name, for diagnostics), `is_supported` (capability query) and `connect`
//!   (produce a live handle or fail).
//! - [`ConnectParams`](params::ConnectParams) -- per-attempt connection
//!   parameters (host, credentials, database, port). A port of `0` means
//!   "use the engine's default port".
//! - [`Dsn`](params::Dsn) -- the connection descriptor (scheme, endpoint,
//!   database, charset) a driver derives from the parameters. Port
//!   defaulting happens here, before any client call.
//! - [`ConnectError`](error::ConnectError) -- the single error produced by
//!   a failed connect. It preserves the client library's message, numeric
//!   code and structured diagnostics, and keeps the original error
//!   reachable through [`std::error::Error::source`].
//! - [`CapabilityProbe`](capability::CapabilityProbe) -- answers whether a
//!   client capability is available. Concrete drivers ship a probe backed
//!   by compiled cargo features; tests inject their own.
//!
//! # Entry point
//!
//! [`open()`](driver::open) runs the driver lifecycle: it checks
//! `is_supported` against a probe, logs the attempt, and delegates to
//! [`Driver::connect`](driver::Driver::connect). A handle is only ever
//! returned when the underlying connect succeeds.
//!
//! ```rust,ignore
//! use dbridge_core::driver::open;
//! use dbridge_core::params::ConnectParams;
//!
//! let params = ConnectParams::builder()
//!     .host("localhost".to_owned())
//!     .username("root".to_owned())
//!     .database("app".to_owned())
//!     .build();
//! let handle = open(&driver, &probe, &params)?;
//! ```
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on
//!   `ConnectParams`, `DriverErrorInfo` and `Serialize` on `ConnectError`
//!   (the source error is skipped; the data fields survive).
//!
//! Concrete drivers live in the separate `dbridge_drivers` crate.

pub mod capability;
pub mod driver;
pub mod error;
pub mod params;

pub use driver::{open, Driver};
