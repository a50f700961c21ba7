use crate::domain::catalog::KnownRadioModel;
use crate::domain::model::RadioModel;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// Activation key identifying the caller's license (`key`).
///
/// The value is trimmed and may be empty; an empty key is simply not sent, which
/// lets the service answer in demo mode or with [`crate::ErrorKind::InvalidLicense`].
pub struct ActivationKey(String);

impl ActivationKey {
    /// Form field name used by the service (`key`).
    pub const FIELD: &'static str = "key";

    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self(value.trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ActivationKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ActivationKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// License type reported by `login`.
///
/// Unknown codes are preserved in [`LicenseType::Unknown`].
pub enum LicenseType {
    Personal,
    Company,
    Unknown(i32),
}

impl LicenseType {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Personal,
            1 => Self::Company,
            other => Self::Unknown(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Personal => 0,
            Self::Company => 1,
            Self::Unknown(code) => code,
        }
    }
}

/// Anything that identifies a radio model by its wire name.
///
/// Lets `calc`/`info` take a descriptor, a catalog entry or a plain string.
pub trait ModelName {
    fn model_name(&self) -> &str;
}

impl ModelName for str {
    fn model_name(&self) -> &str {
        self
    }
}

impl ModelName for String {
    fn model_name(&self) -> &str {
        self
    }
}

impl ModelName for RadioModel {
    fn model_name(&self) -> &str {
        self.name()
    }
}

impl ModelName for KnownRadioModel {
    fn model_name(&self) -> &str {
        self.name()
    }
}

impl<T: ModelName + ?Sized> ModelName for &T {
    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
