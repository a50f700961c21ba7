use serde::Deserialize;

use crate::domain::{Command, ErrorKind, Outcome, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains unknown error code: {code}")]
    UnknownErrorCode { code: i32 },

    #[error("response describes an invalid radio model {name:?}: {source}")]
    InvalidRadioModel {
        name: String,
        #[source]
        source: ValidationError,
    },
}

/// The field every response carries, whatever the command.
#[derive(Debug, Clone, Deserialize)]
struct ErrorEnvelope {
    error: i32,
}

pub(super) fn decode_error_kind(json: &str) -> Result<ErrorKind, TransportError> {
    let envelope: ErrorEnvelope = serde_json::from_str(json)?;
    ErrorKind::from_code(envelope.error).ok_or(TransportError::UnknownErrorCode {
        code: envelope.error,
    })
}

pub(super) fn command_form(command: &str) -> Vec<(String, String)> {
    vec![(Command::FIELD.to_owned(), command.to_owned())]
}

pub fn encode_raw_form(command: &str, params: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut form = command_form(command);
    form.extend(
        params
            .into_iter()
            .filter(|(key, _)| key != Command::FIELD),
    );
    form
}

/// Decode any response into its error kind and the full JSON object.
pub fn decode_raw_json_response(
    json: &str,
) -> Result<Outcome<serde_json::Map<String, serde_json::Value>>, TransportError> {
    let error = decode_error_kind(json)?;
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
    Ok(Outcome::new(error, Some(object)))
}
