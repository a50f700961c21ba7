use crate::domain::error_kind::ErrorKind;
use crate::domain::value::LicenseType;

#[derive(Debug, Clone, PartialEq)]
/// Result of a remote operation: the error kind plus an optional payload.
///
/// `payload` is `None` for [`ErrorKind::ConnectionError`] and whenever the operation
/// has nothing to return for the reported kind.
pub struct Outcome<T> {
    pub error: ErrorKind,
    pub payload: Option<T>,
}

impl<T> Outcome<T> {
    pub fn new(error: ErrorKind, payload: Option<T>) -> Self {
        Self { error, payload }
    }

    /// A locally fabricated connection failure.
    pub fn connection_error() -> Self {
        Self::failure(ErrorKind::ConnectionError)
    }

    /// An outcome without payload.
    pub fn failure(error: ErrorKind) -> Self {
        Self {
            error,
            payload: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_success()
    }

    /// Split into the `(error, payload)` pair.
    pub fn into_parts(self) -> (ErrorKind, Option<T>) {
        (self.error, self.payload)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            error: self.error,
            payload: self.payload.map(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// License details returned by `login`.
pub struct LicenseInfo {
    /// `false` for invalid or expired keys.
    pub activation_status: bool,
    /// Owner (user or company) name.
    pub user_name: String,
    pub license_type: LicenseType,
    /// Expiration date in `YYYY-MM-DD` format.
    pub expiration_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Payload of a `calc` response.
///
/// On success `code` carries the unlock code. On input errors the service may echo its
/// authoritative constraints so a UI can correct the input.
pub struct CalcResponse {
    pub code: Option<String>,
    pub serial_max_len: Option<usize>,
    pub serial_regex_pattern: Option<String>,
    pub extra_max_len: Option<usize>,
    pub extra_regex_pattern: Option<String>,
}
