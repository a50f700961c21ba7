use serde::Deserialize;

use super::envelope::{TransportError, command_form, decode_error_kind};
use crate::domain::{Command, LicenseInfo, LicenseType, Outcome};

#[derive(Debug, Clone, Deserialize)]
struct LoginJsonResponse {
    #[serde(default)]
    license: Option<LicenseJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LicenseJson {
    #[serde(default)]
    activation_status: bool,
    #[serde(default)]
    user_name: String,
    #[serde(rename = "type", default)]
    license_type: i32,
    #[serde(default)]
    expiration_date: String,
}

impl From<LicenseJson> for LicenseInfo {
    fn from(value: LicenseJson) -> Self {
        Self {
            activation_status: value.activation_status,
            user_name: value.user_name,
            license_type: LicenseType::from_code(value.license_type),
            expiration_date: value.expiration_date,
        }
    }
}

pub fn encode_login_form() -> Vec<(String, String)> {
    command_form(Command::Login.as_str())
}

/// Decode a `login` response. The payload is present whenever the service sends a
/// `license` object, including for inactive keys.
pub fn decode_login_json_response(json: &str) -> Result<Outcome<LicenseInfo>, TransportError> {
    let error = decode_error_kind(json)?;
    let parsed: LoginJsonResponse = serde_json::from_str(json)?;
    Ok(Outcome::new(error, parsed.license.map(LicenseInfo::from)))
}
