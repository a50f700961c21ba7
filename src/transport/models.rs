use serde::Deserialize;

use super::envelope::{TransportError, command_form, decode_error_kind};
use super::pattern::TransportPattern;
use crate::domain::{Command, InfoRequest, Outcome, RadioModel};

/// Constraint block shared by `info` responses and `list` entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConstraintsJson {
    serial_max_len: usize,
    #[serde(default)]
    serial_regex_pattern: Option<TransportPattern>,
    #[serde(default)]
    extra_max_len: Option<usize>,
    #[serde(default)]
    extra_regex_pattern: Option<TransportPattern>,
}

impl ConstraintsJson {
    fn into_radio_model(self, name: &str) -> Result<RadioModel, TransportError> {
        let serial_pattern = self
            .serial_regex_pattern
            .and_then(TransportPattern::into_pattern)
            .unwrap_or_default();
        let extra_pattern = self
            .extra_regex_pattern
            .and_then(TransportPattern::into_pattern);

        RadioModel::from_service(
            name,
            self.serial_max_len,
            serial_pattern,
            self.extra_max_len.unwrap_or(0),
            extra_pattern,
        )
        .map_err(|source| TransportError::InvalidRadioModel {
            name: name.to_owned(),
            source,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ListJsonResponse {
    #[serde(rename = "supportedRadioModels")]
    supported_radio_models: serde_json::Map<String, serde_json::Value>,
}

pub fn encode_info_form(request: &InfoRequest) -> Vec<(String, String)> {
    let mut params = command_form(Command::Info.as_str());
    params.push((
        RadioModel::FIELD.to_owned(),
        request.radio_model().to_owned(),
    ));
    params
}

pub fn encode_list_form() -> Vec<(String, String)> {
    command_form(Command::List.as_str())
}

/// Decode an `info` response. The descriptor is named after the requested model.
pub fn decode_info_json_response(
    request: &InfoRequest,
    json: &str,
) -> Result<Outcome<RadioModel>, TransportError> {
    let error = decode_error_kind(json)?;
    if !error.is_success() {
        return Ok(Outcome::failure(error));
    }

    let parsed: ConstraintsJson = serde_json::from_str(json)?;
    let model = parsed.into_radio_model(request.radio_model())?;
    Ok(Outcome::new(error, Some(model)))
}

/// Decode a `list` response, keeping the order in which the service lists models.
pub fn decode_list_json_response(json: &str) -> Result<Outcome<Vec<RadioModel>>, TransportError> {
    let error = decode_error_kind(json)?;
    if !error.is_success() {
        return Ok(Outcome::failure(error));
    }

    let parsed: ListJsonResponse = serde_json::from_str(json)?;
    let models = parsed
        .supported_radio_models
        .into_iter()
        .map(|(name, value)| {
            let constraints: ConstraintsJson = serde_json::from_value(value)?;
            constraints.into_radio_model(&name)
        })
        .collect::<Result<Vec<RadioModel>, TransportError>>()?;

    Ok(Outcome::new(error, Some(models)))
}
