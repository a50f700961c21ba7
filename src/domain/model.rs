use regex::Regex;

use crate::domain::error_kind::ErrorKind;
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone)]
struct FieldRule {
    max_len: usize,
    pattern: String,
    /// `None` when a service-provided pattern uses syntax `regex` cannot compile.
    matcher: Option<Regex>,
}

impl FieldRule {
    fn compile(
        field: &'static str,
        max_len: usize,
        pattern: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let pattern = pattern.into();
        let matcher = anchored(&pattern).map_err(|err| ValidationError::InvalidPattern {
            field,
            pattern: pattern.clone(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            max_len,
            pattern,
            matcher: Some(matcher),
        })
    }

    /// Like [`FieldRule::compile`], but keeps the rule with only the length check when
    /// the pattern does not compile.
    fn compile_or_skip(model: &str, field: &'static str, max_len: usize, pattern: String) -> Self {
        let matcher = match anchored(&pattern) {
            Ok(matcher) => Some(matcher),
            Err(err) => {
                tracing::warn!(
                    model,
                    field,
                    pattern = %pattern,
                    error = %err,
                    "unsupported pattern syntax, offline pattern check disabled"
                );
                None
            }
        };
        Self {
            max_len,
            pattern,
            matcher,
        }
    }

    fn has_valid_len(&self, value: &str) -> bool {
        value.chars().count() == self.max_len
    }

    fn matches(&self, value: &str) -> bool {
        self.matcher
            .as_ref()
            .is_none_or(|matcher| matcher.is_match(value))
    }
}

// Anchored at the start only: trailing input after a partial match is accepted.
fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})"))
}

#[derive(Debug, Clone)]
/// Input constraints of a single radio model.
///
/// A descriptor is immutable once built. It comes from the built-in catalog
/// ([`crate::KnownRadioModel`]), from the `info`/`list` operations, or from
/// [`RadioModel::new`] / [`RadioModel::with_extra`].
///
/// Invariant: the extra rule exists only when `extra_max_len > 0`.
pub struct RadioModel {
    name: String,
    serial: FieldRule,
    extra: Option<FieldRule>,
}

impl RadioModel {
    /// Form field name used by the service (`radio_model`).
    pub const FIELD: &'static str = "radio_model";

    /// Create a descriptor for a model without an extra field.
    pub fn new(
        name: impl Into<String>,
        serial_max_len: usize,
        serial_pattern: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_extra(name, serial_max_len, serial_pattern, 0, None::<String>)
    }

    /// Create a descriptor with an optional extra field.
    ///
    /// When `extra_max_len == 0` the extra pattern is discarded. When the extra field
    /// exists but no pattern is given, any extra text of the right length passes.
    pub fn with_extra(
        name: impl Into<String>,
        serial_max_len: usize,
        serial_pattern: impl Into<String>,
        extra_max_len: usize,
        extra_pattern: Option<impl Into<String>>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let serial = FieldRule::compile("serial", serial_max_len, serial_pattern)?;
        let extra = if extra_max_len > 0 {
            let pattern: String = extra_pattern.map(Into::into).unwrap_or_default();
            Some(FieldRule::compile("extra", extra_max_len, pattern)?)
        } else {
            None
        };

        Ok(Self {
            name,
            serial,
            extra,
        })
    }

    /// Build a descriptor from constraints sent by the service.
    ///
    /// The service is authoritative, so a pattern this crate cannot compile does not
    /// reject the model: the descriptor keeps it and skips only that pattern check.
    pub(crate) fn from_service(
        name: impl Into<String>,
        serial_max_len: usize,
        serial_pattern: String,
        extra_max_len: usize,
        extra_pattern: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let serial = FieldRule::compile_or_skip(&name, "serial", serial_max_len, serial_pattern);
        let extra = (extra_max_len > 0).then(|| {
            FieldRule::compile_or_skip(
                &name,
                "extra",
                extra_max_len,
                extra_pattern.unwrap_or_default(),
            )
        });

        Ok(Self {
            name,
            serial,
            extra,
        })
    }

    /// Model name as used on the wire (e.g. `ford-m-series`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact number of characters a serial must have.
    pub fn serial_max_len(&self) -> usize {
        self.serial.max_len
    }

    pub fn serial_regex_pattern(&self) -> &str {
        &self.serial.pattern
    }

    /// Exact number of characters of extra data, `0` when the model has no extra field.
    pub fn extra_max_len(&self) -> usize {
        self.extra.as_ref().map_or(0, |rule| rule.max_len)
    }

    pub fn extra_regex_pattern(&self) -> Option<&str> {
        self.extra.as_ref().map(|rule| rule.pattern.as_str())
    }

    /// Whether every pattern of this descriptor is enforced by [`RadioModel::validate`].
    ///
    /// `false` only for service-provided descriptors whose pattern syntax `regex`
    /// cannot compile; their pattern checks are left to the service.
    pub fn checks_all_patterns(&self) -> bool {
        self.serial.matcher.is_some()
            && self
                .extra
                .as_ref()
                .is_none_or(|rule| rule.matcher.is_some())
    }

    /// Whether this model expects extra data (e.g. a supplier code).
    pub fn has_extra(&self) -> bool {
        self.extra.is_some()
    }

    /// Validate a serial and optional extra data offline.
    ///
    /// Checks run in order and stop at the first failure: serial length, serial pattern,
    /// then (only for a non-empty `extra` on a model that has an extra field) extra length
    /// and extra pattern. Patterns must match starting at the first character.
    ///
    /// This is a pre-check only: the service repeats it authoritatively and may still
    /// answer [`ErrorKind::InvalidSerialNotSupported`].
    pub fn validate(&self, serial: &str, extra: Option<&str>) -> ErrorKind {
        if !self.serial.has_valid_len(serial) {
            return ErrorKind::InvalidSerialLength;
        }
        if !self.serial.matches(serial) {
            return ErrorKind::InvalidSerialPattern;
        }

        if let (Some(rule), Some(extra)) = (self.extra.as_ref(), extra) {
            if !extra.is_empty() {
                if !rule.has_valid_len(extra) {
                    return ErrorKind::InvalidExtraLength;
                }
                if !rule.matches(extra) {
                    return ErrorKind::InvalidExtraPattern;
                }
            }
        }

        ErrorKind::Success
    }
}

impl PartialEq for RadioModel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.serial_max_len() == other.serial_max_len()
            && self.serial_regex_pattern() == other.serial_regex_pattern()
            && self.extra_max_len() == other.extra_max_len()
            && self.extra_regex_pattern() == other.extra_regex_pattern()
    }
}

impl Eq for RadioModel {}
