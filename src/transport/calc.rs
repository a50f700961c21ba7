use serde::Deserialize;

use super::envelope::{TransportError, command_form, decode_error_kind};
use super::pattern::TransportPattern;
use crate::domain::{CalcRequest, CalcResponse, Command, Outcome, RadioModel};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalcJsonResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    serial_max_len: Option<usize>,
    #[serde(default)]
    serial_regex_pattern: Option<TransportPattern>,
    #[serde(default)]
    extra_max_len: Option<usize>,
    #[serde(default)]
    extra_regex_pattern: Option<TransportPattern>,
}

pub fn encode_calc_form(request: &CalcRequest) -> Vec<(String, String)> {
    let mut params = command_form(Command::Calc.as_str());
    params.push((
        RadioModel::FIELD.to_owned(),
        request.radio_model().to_owned(),
    ));
    params.push((
        CalcRequest::SERIAL_FIELD.to_owned(),
        request.serial().to_owned(),
    ));
    params.push((
        CalcRequest::EXTRA_FIELD.to_owned(),
        request.extra().to_owned(),
    ));
    params
}

/// Decode a `calc` response. Any response the service sends carries a payload.
pub fn decode_calc_json_response(json: &str) -> Result<Outcome<CalcResponse>, TransportError> {
    let error = decode_error_kind(json)?;
    let parsed: CalcJsonResponse = serde_json::from_str(json)?;

    Ok(Outcome::new(
        error,
        Some(CalcResponse {
            code: parsed.code,
            serial_max_len: parsed.serial_max_len,
            serial_regex_pattern: parsed
                .serial_regex_pattern
                .and_then(TransportPattern::into_pattern),
            extra_max_len: parsed.extra_max_len,
            extra_regex_pattern: parsed
                .extra_regex_pattern
                .and_then(TransportPattern::into_pattern),
        }),
    ))
}
