use crate::capability::CapabilityProbe;
use crate::error::ConnectError;
use crate::params::ConnectParams;

/// A swappable connection factory for one database engine.
///
/// A driver is stateless: each [`connect`](Self::connect) call builds its
/// own descriptor from the given parameters and produces its own handle.
/// There is no pooling, retry or reconnect at this layer.
pub trait Driver {
    /// Opaque live handle to the server, owned by the caller. Only ever
    /// produced by a successful connect.
    type Handle;

    /// Fixed engine name, e.g. `"MySQL"`. Constant regardless of
    /// connection state or parameters; used for diagnostics and logging.
    fn driver_name(&self) -> &'static str;

    /// Whether every client capability this driver needs is available
    /// according to `probe`. Pure query, no side effects.
    fn is_supported(&self, probe: &dyn CapabilityProbe) -> bool;

    /// Open a connection to the server described by `params`.
    ///
    /// A port of `0` resolves to the engine's default port before use.
    /// Blocks until the client library succeeds or fails; any timeout
    /// behavior is the client library's default.
    ///
    /// # Errors
    ///
    /// Returns a [`ConnectError`] preserving the client library's message,
    /// code and diagnostics when the connection cannot be established.
    fn connect(&self, params: &ConnectParams) -> Result<Self::Handle, ConnectError>;
}

/// Driver lifecycle: check support, then connect.
///
/// Checks [`Driver::is_supported`] against `probe` before touching the
/// network, logging the attempt under the driver's name.
///
/// # Errors
///
/// Returns [`ConnectError::unsupported`] without attempting a connection
/// when the probe reports a missing capability; otherwise whatever
/// [`Driver::connect`] returns.
pub fn open<D: Driver>(
    driver: &D,
    probe: &dyn CapabilityProbe,
    params: &ConnectParams,
) -> Result<D::Handle, ConnectError> {
    if !driver.is_supported(probe) {
        tracing::debug!(driver = driver.driver_name(), "driver not supported");
        return Err(ConnectError::unsupported(driver.driver_name()));
    }
    tracing::debug!(
        driver = driver.driver_name(),
        host = %params.host,
        port = params.port,
        database = %params.database,
        "connecting"
    );
    driver.connect(params)
}
