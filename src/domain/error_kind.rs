use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Outcome code shared by offline validation and the remote service.
///
/// Numeric values are the wire values of the `error` field and must never be renumbered.
/// [`ErrorKind::ConnectionError`] is the only kind produced locally; every other kind is
/// either taken from a response or returned by [`crate::RadioModel::validate`].
pub enum ErrorKind {
    /// The service could not be reached or its response could not be decoded.
    ConnectionError,
    Success,
    /// Input data failed validation on the server (length, format etc.).
    InvalidInput,
    /// The command is not supported by the service.
    InvalidCommand,
    /// The radio model is not supported by the calculator.
    InvalidRadioModel,
    InvalidSerialLength,
    InvalidSerialPattern,
    /// The serial matches the pattern but this particular unit is not supported.
    InvalidSerialNotSupported,
    InvalidExtraLength,
    InvalidExtraPattern,
    /// The activation key is invalid or expired.
    InvalidLicense,
}

impl ErrorKind {
    /// Form/JSON field name carrying the code (`error`).
    pub const FIELD: &'static str = "error";

    /// Convert a wire code into a known kind.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -1 => Self::ConnectionError,
            0 => Self::Success,
            1 => Self::InvalidInput,
            2 => Self::InvalidCommand,
            3 => Self::InvalidRadioModel,
            4 => Self::InvalidSerialLength,
            5 => Self::InvalidSerialPattern,
            6 => Self::InvalidSerialNotSupported,
            7 => Self::InvalidExtraLength,
            8 => Self::InvalidExtraPattern,
            100 => Self::InvalidLicense,
            _ => return None,
        })
    }

    /// Wire code of this kind.
    pub fn code(self) -> i32 {
        match self {
            Self::ConnectionError => -1,
            Self::Success => 0,
            Self::InvalidInput => 1,
            Self::InvalidCommand => 2,
            Self::InvalidRadioModel => 3,
            Self::InvalidSerialLength => 4,
            Self::InvalidSerialPattern => 5,
            Self::InvalidSerialNotSupported => 6,
            Self::InvalidExtraLength => 7,
            Self::InvalidExtraPattern => 8,
            Self::InvalidLicense => 100,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    /// Whether this kind rejects the serial or extra input (detectable offline, except
    /// [`ErrorKind::InvalidSerialNotSupported`]).
    pub fn is_input_error(self) -> bool {
        matches!(
            self,
            Self::InvalidSerialLength
                | Self::InvalidSerialPattern
                | Self::InvalidSerialNotSupported
                | Self::InvalidExtraLength
                | Self::InvalidExtraPattern
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::ConnectionError => "cannot connect to the Web API interface",
            Self::Success => "success",
            Self::InvalidInput => "invalid input data",
            Self::InvalidCommand => "invalid Web API command",
            Self::InvalidRadioModel => "radio model is not supported",
            Self::InvalidSerialLength => "invalid serial number length",
            Self::InvalidSerialPattern => "serial number does not match the expected pattern",
            Self::InvalidSerialNotSupported => "serial number is not supported",
            Self::InvalidExtraLength => "invalid extra data length",
            Self::InvalidExtraPattern => "extra data does not match the expected pattern",
            Self::InvalidLicense => "license key is invalid or expired",
        };
        write!(f, "{text} ({})", self.code())
    }
}
