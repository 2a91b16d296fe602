use core::fmt::{Display, Formatter, Result as FmtResult};
use std::error::Error;

/// Structured driver-specific diagnostics accompanying a connection failure.
///
/// All fields are optional: transport-level failures (unreachable host,
/// refused connection) carry no server payload.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverErrorInfo {
    /// SQLSTATE reported by the server, when available.
    pub sql_state: Option<String>,
    /// Engine-specific numeric error code, when available.
    pub driver_code: Option<u32>,
    /// Engine-specific error message, when available.
    pub driver_message: Option<String>,
}

/// Error establishing a connection.
///
/// The single error type a failed [`connect`](crate::driver::Driver::connect)
/// produces. Translation from the client library is lossless: the original
/// message and numeric code are kept as data, server diagnostics land in
/// [`DriverErrorInfo`], and the original error stays reachable through
/// [`std::error::Error::source`].
///
/// This type is deliberately generic rather than engine-specific: at the
/// point a connect fails, no handle exists yet, so nothing engine-specific
/// can be built around one. Drivers must not attempt to construct a
/// handle-backed error wrapper before a handle exists.
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
#[derive(Debug)]
pub struct ConnectError {
    /// Human-readable message from the underlying failure.
    pub message: String,
    /// Numeric code from the underlying failure; `0` when the client
    /// library reported none.
    pub code: u32,
    /// Structured driver diagnostics.
    pub info: DriverErrorInfo,
    #[cfg_attr(feature = "serde", serde(skip))]
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl ConnectError {
    /// Create an error from the preserved fields of an underlying failure.
    #[must_use]
    pub const fn new(message: String, code: u32, info: DriverErrorInfo) -> Self {
        Self {
            message,
            code,
            info,
            source: None,
        }
    }

    /// Attach the original client-library error as the cause.
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Error for a driver whose client capabilities are missing from this
    /// build or platform. Carries no server payload and no cause.
    #[must_use]
    pub fn unsupported(driver_name: &str) -> Self {
        Self::new(
            format!("driver {driver_name} is not supported on this platform"),
            0,
            DriverErrorInfo::default(),
        )
    }
}

impl Display for ConnectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.message)
    }
}

impl Error for ConnectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;

    use super::{ConnectError, DriverErrorInfo};

    #[test]
    fn preserves_all_fields() {
        let info = DriverErrorInfo {
            sql_state: Some("28000".to_owned()),
            driver_code: Some(1045),
            driver_message: Some("Access denied".to_owned()),
        };
        let err = ConnectError::new("Access denied".to_owned(), 1045, info.clone())
            .with_source(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));

        assert_eq!(err.message, "Access denied");
        assert_eq!(err.code, 1045);
        assert_eq!(err.info, info);
        assert_eq!(err.to_string(), "Access denied");
    }

    #[test]
    fn source_exposes_the_original_error() {
        let err = ConnectError::new("refused".to_owned(), 0, DriverErrorInfo::default())
            .with_source(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));

        let source = err.source().expect("source must be preserved");
        let io_err = source
            .downcast_ref::<io::Error>()
            .expect("source must be the original error type");
        assert_eq!(io_err.kind(), io::ErrorKind::ConnectionRefused);
    }

    #[test]
    fn unsupported_has_no_payload_and_no_cause() {
        let err = ConnectError::unsupported("MySQL");
        assert_eq!(err.code, 0);
        assert_eq!(err.info, DriverErrorInfo::default());
        assert!(err.source().is_none());
        assert!(err.message.contains("MySQL"));
    }
}
