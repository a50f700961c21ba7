//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    ActivationKey, CalcRequest, CalcResponse, Command, InfoRequest, LicenseInfo, ModelName,
    Outcome, RadioModel,
};
use crate::transport::TransportError;

const DEFAULT_ENDPOINT: &str = "https://www.wyznania.com/api/radio-code-calculator/v1";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Failures behind a [`crate::ErrorKind::ConnectionError`].
///
/// Remote operations never return this type: the client logs it and reports
/// `ConnectionError` instead. It is public because building a client can fail.
pub enum RadioCodeError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be decoded into the expected payload.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured endpoint is not a valid absolute URL.
    #[error("invalid endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone)]
/// Builder for [`RadioCodeClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct RadioCodeClientBuilder {
    key: ActivationKey,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RadioCodeClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(key: impl Into<ActivationKey>) -> Self {
        Self {
            key: key.into(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the Web API endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// A request running past it is reported as `ConnectionError`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`RadioCodeClient`].
    pub fn build(self) -> Result<RadioCodeClient, RadioCodeError> {
        url::Url::parse(&self.endpoint).map_err(|source| RadioCodeError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| RadioCodeError::Transport(Box::new(err)))?;

        Ok(RadioCodeClient {
            key: self.key,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Radio Code Calculator client.
///
/// Every operation sends one form-encoded POST to the endpoint
/// (`https://www.wyznania.com/api/radio-code-calculator/v1` by default) and reduces
/// the JSON answer to an [`Outcome`]. Operations never fail with a Rust error: transport
/// problems, non-2xx statuses and undecodable bodies all become
/// [`crate::ErrorKind::ConnectionError`] without payload.
///
/// The client holds only the activation key and endpoint, so it can be cloned and
/// shared across tasks freely.
pub struct RadioCodeClient {
    key: ActivationKey,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl RadioCodeClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`RadioCodeClient::builder`].
    pub fn new(key: impl Into<ActivationKey>) -> Self {
        Self {
            key: key.into(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(key: impl Into<ActivationKey>) -> RadioCodeClientBuilder {
        RadioCodeClientBuilder::new(key)
    }

    /// Check the activation key and fetch license details.
    pub async fn login(&self) -> Outcome<LicenseInfo> {
        self.execute(
            Command::Login.as_str(),
            crate::transport::encode_login_form(),
            crate::transport::decode_login_json_response,
        )
        .await
    }

    /// Ask the service to generate an unlock code.
    ///
    /// The model's [`RadioModel::validate`] is not called: the service always performs
    /// the authoritative checks and may reject serials a local check accepts.
    pub async fn calc<M: ModelName + ?Sized>(
        &self,
        model: &M,
        serial: &str,
        extra: &str,
    ) -> Outcome<CalcResponse> {
        let request = CalcRequest::new(model, serial, extra);
        self.execute(
            Command::Calc.as_str(),
            crate::transport::encode_calc_form(&request),
            crate::transport::decode_calc_json_response,
        )
        .await
    }

    /// Fetch the service's current constraints for one model.
    pub async fn info<M: ModelName + ?Sized>(&self, model: &M) -> Outcome<RadioModel> {
        let request = InfoRequest::new(model);
        self.execute(
            Command::Info.as_str(),
            crate::transport::encode_info_form(&request),
            |body| crate::transport::decode_info_json_response(&request, body),
        )
        .await
    }

    /// List every model the service supports, in the order the service sends them.
    pub async fn list(&self) -> Outcome<Vec<RadioModel>> {
        self.execute(
            Command::List.as_str(),
            crate::transport::encode_list_form(),
            crate::transport::decode_list_json_response,
        )
        .await
    }

    /// Send an arbitrary command and return the whole JSON object.
    ///
    /// A `command` entry in `params` is replaced by `command`; the activation key is
    /// added as for the typed operations.
    pub async fn send_raw(
        &self,
        command: &str,
        params: Vec<(String, String)>,
    ) -> Outcome<serde_json::Map<String, serde_json::Value>> {
        self.execute(
            command,
            crate::transport::encode_raw_form(command, params),
            crate::transport::decode_raw_json_response,
        )
        .await
    }

    async fn execute<T>(
        &self,
        command: &str,
        params: Vec<(String, String)>,
        decode: impl FnOnce(&str) -> Result<Outcome<T>, TransportError>,
    ) -> Outcome<T> {
        match self.try_execute(command, params, decode).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(command, error = %err, "radio code request failed");
                Outcome::connection_error()
            }
        }
    }

    async fn try_execute<T>(
        &self,
        command: &str,
        mut params: Vec<(String, String)>,
        decode: impl FnOnce(&str) -> Result<Outcome<T>, TransportError>,
    ) -> Result<Outcome<T>, RadioCodeError> {
        if !self.key.is_empty() {
            params.push((ActivationKey::FIELD.to_owned(), self.key.as_str().to_owned()));
        }

        tracing::debug!(command, endpoint = %self.endpoint, "sending radio code request");
        let response = self
            .http
            .post_form(&self.endpoint, params)
            .await
            .map_err(RadioCodeError::Transport)?;
        tracing::debug!(command, status = response.status, "received radio code response");

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(RadioCodeError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let outcome =
            decode(&response.body).map_err(|err| RadioCodeError::Parse(Box::new(err)))?;
        tracing::debug!(command, error = outcome.error.code(), "decoded radio code response");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::{ErrorKind, KnownRadioModel, LicenseType};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_url: Option<String>,
        last_params: Vec<(String, String)>,
        calls: usize,
        response: Result<(u16, String), String>,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self::with_response(Ok((response_status, response_body.into())))
        }

        fn failing(message: impl Into<String>) -> Self {
            Self::with_response(Err(message.into()))
        }

        fn with_response(response: Result<(u16, String), String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_url: None,
                    last_params: Vec::new(),
                    calls: 0,
                    response,
                })),
            }
        }

        fn last_request(&self) -> (Option<String>, Vec<(String, String)>) {
            let state = self.state.lock().unwrap();
            (state.last_url.clone(), state.last_params.clone())
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().calls
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_form<'a>(
            &'a self,
            url: &'a str,
            params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let response = {
                    let mut state = self.state.lock().unwrap();
                    state.last_url = Some(url.to_owned());
                    state.last_params = params;
                    state.calls += 1;
                    state.response.clone()
                };
                match response {
                    Ok((status, body)) => Ok(HttpResponse { status, body }),
                    Err(message) => Err(message.into()),
                }
            })
        }
    }

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    fn make_client(key: &str, transport: FakeTransport) -> RadioCodeClient {
        RadioCodeClient {
            key: ActivationKey::new(key),
            endpoint: "https://example.invalid/api/v1".to_owned(),
            http: Arc::new(transport),
        }
    }

    #[tokio::test]
    async fn login_sends_command_and_key_and_parses_license() {
        let json = r#"
        {
          "error": 0,
          "license": {
            "activationStatus": true,
            "userName": "Jan Kowalski",
            "type": 0,
            "expirationDate": "2030-12-31"
          }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client("ABCD-ABCD-ABCD-ABCD", transport.clone());

        let (error, license) = client.login().await.into_parts();
        assert_eq!(error, ErrorKind::Success);
        let license = license.unwrap();
        assert!(license.activation_status);
        assert_eq!(license.user_name, "Jan Kowalski");
        assert_eq!(license.license_type, LicenseType::Personal);
        assert_eq!(license.expiration_date, "2030-12-31");

        let (url, params) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/api/v1"));
        assert_eq!(
            params,
            vec![
                ("command".to_owned(), "login".to_owned()),
                ("key".to_owned(), "ABCD-ABCD-ABCD-ABCD".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn empty_key_is_not_sent() {
        let transport = FakeTransport::new(200, r#"{ "error": 100 }"#);
        let client = make_client("  ", transport.clone());

        let outcome = client.login().await;
        assert_eq!(outcome.into_parts(), (ErrorKind::InvalidLicense, None));

        let (_, params) = transport.last_request();
        assert!(params.iter().all(|(k, _)| k != "key"), "{params:?}");
    }

    #[tokio::test]
    async fn calc_sends_descriptor_name_and_returns_code() {
        let transport = FakeTransport::new(200, r#"{ "error": 0, "code": "2487" }"#);
        let client = make_client("key", transport.clone());

        let outcome = client
            .calc(KnownRadioModel::FordMSeries.descriptor(), "123456", "")
            .await;
        assert_eq!(outcome.error, ErrorKind::Success);
        assert_eq!(outcome.payload.unwrap().code.as_deref(), Some("2487"));

        let (_, params) = transport.last_request();
        assert_param(&params, "command", "calc");
        assert_param(&params, "radio_model", "ford-m-series");
        assert_param(&params, "serial", "123456");
        assert_param(&params, "extra", "");
        assert_param(&params, "key", "key");
    }

    #[tokio::test]
    async fn calc_does_not_validate_locally() {
        let json = r#"
        {
          "error": 4,
          "serialMaxLen": 6,
          "serialRegexPattern": { "python": "^([0-9]{6})$" },
          "extraMaxLen": 0,
          "extraRegexPattern": null
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client("key", transport.clone());

        let outcome = client.calc("ford-m-series", "1", "").await;
        assert_eq!(transport.calls(), 1);
        assert_eq!(outcome.error, ErrorKind::InvalidSerialLength);
        let payload = outcome.payload.unwrap();
        assert_eq!(payload.serial_max_len, Some(6));
        assert_eq!(payload.serial_regex_pattern.as_deref(), Some("^([0-9]{6})$"));
    }

    #[tokio::test]
    async fn calc_reports_unsupported_serial_from_server() {
        let transport = FakeTransport::new(200, r#"{ "error": 6 }"#);
        let client = make_client("key", transport);

        let model = KnownRadioModel::FordMSeries.descriptor();
        assert_eq!(model.validate("000000", None), ErrorKind::Success);
        let outcome = client.calc(model, "000000", "").await;
        assert_eq!(outcome.error, ErrorKind::InvalidSerialNotSupported);
    }

    #[tokio::test]
    async fn info_builds_fresh_descriptor() {
        let json = r#"
        {
          "error": 0,
          "serialMaxLen": 6,
          "serialRegexPattern": { "python": "^([0-9]{6})$" },
          "extraMaxLen": 0,
          "extraRegexPattern": null
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client("key", transport.clone());

        let (error, model) = client.info("ford-m-series").await.into_parts();
        assert_eq!(error, ErrorKind::Success);
        let model = model.unwrap();
        assert_eq!(model.name(), "ford-m-series");
        assert_eq!(model.serial_max_len(), 6);
        assert_eq!(model.validate("12345A", None), ErrorKind::InvalidSerialPattern);

        let (_, params) = transport.last_request();
        assert_param(&params, "command", "info");
        assert_param(&params, "radio_model", "ford-m-series");
    }

    #[tokio::test]
    async fn info_failure_returns_no_descriptor() {
        let transport = FakeTransport::new(200, r#"{ "error": 3 }"#);
        let client = make_client("key", transport);

        let outcome = client.info(&KnownRadioModel::JaguarAlpine).await;
        assert_eq!(outcome.into_parts(), (ErrorKind::InvalidRadioModel, None));
    }

    #[tokio::test]
    async fn list_returns_one_descriptor_per_entry() {
        let json = r#"
        {
          "error": 0,
          "supportedRadioModels": {
            "renault-dacia": {
              "serialMaxLen": 4,
              "serialRegexPattern": { "python": "^([A-Z]{1}[0-9]{3})$" },
              "extraMaxLen": 0,
              "extraRegexPattern": null
            },
            "ford-travelpilot": {
              "serialMaxLen": 7,
              "serialRegexPattern": { "python": "^([0-9]{7})$" },
              "extraMaxLen": 0,
              "extraRegexPattern": null
            }
          }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client("key", transport.clone());

        let (error, models) = client.list().await.into_parts();
        assert_eq!(error, ErrorKind::Success);
        let models = models.unwrap();
        assert_eq!(models.len(), 2);
        for model in &models {
            let known = KnownRadioModel::from_name(model.name()).unwrap();
            assert_eq!(model, known.descriptor());
        }

        let (_, params) = transport.last_request();
        assert_param(&params, "command", "list");
    }

    #[tokio::test]
    async fn list_failure_returns_no_models() {
        let transport = FakeTransport::new(200, r#"{ "error": 100 }"#);
        let client = make_client("bad", transport);

        let outcome = client.list().await;
        assert_eq!(outcome.into_parts(), (ErrorKind::InvalidLicense, None));
    }

    #[tokio::test]
    async fn non_success_http_status_is_connection_error() {
        let transport = FakeTransport::new(500, "oops");
        let client = make_client("key", transport);

        assert_eq!(
            client.login().await.into_parts(),
            (ErrorKind::ConnectionError, None)
        );
        assert_eq!(
            client.calc("ford-m-series", "123456", "").await.into_parts(),
            (ErrorKind::ConnectionError, None)
        );
        assert_eq!(
            client.info("ford-m-series").await.into_parts(),
            (ErrorKind::ConnectionError, None)
        );
        assert_eq!(
            client.list().await.into_parts(),
            (ErrorKind::ConnectionError, None)
        );
    }

    #[tokio::test]
    async fn unparseable_body_is_connection_error() {
        for body in ["{ not json }", "", r#"{ "error": 77 }"#, r#"{ "code": "1" }"#] {
            let transport = FakeTransport::new(200, body);
            let client = make_client("key", transport);
            let outcome = client.calc("ford-m-series", "123456", "").await;
            assert_eq!(outcome.into_parts(), (ErrorKind::ConnectionError, None), "{body}");
        }
    }

    #[tokio::test]
    async fn transport_failure_is_connection_error() {
        let transport = FakeTransport::failing("dns error: no such host");
        let client = make_client("key", transport.clone());

        let outcome = client.info("ford-m-series").await;
        assert_eq!(outcome.into_parts(), (ErrorKind::ConnectionError, None));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn list_keeps_models_whose_pattern_regex_cannot_compile() {
        let json = r#"
        {
          "error": 0,
          "supportedRadioModels": {
            "ford-m-series": {
              "serialMaxLen": 6,
              "serialRegexPattern": { "python": "^([0-9]{6})$" }
            },
            "x-model": {
              "serialMaxLen": 6,
              "serialRegexPattern": { "python": "^(?=[0-9])([0-9A-F]{6})\\Z" }
            }
          }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client("key", transport);

        let (error, models) = client.list().await.into_parts();
        assert_eq!(error, ErrorKind::Success);
        let models = models.unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(&models[0], KnownRadioModel::FordMSeries.descriptor());
        assert_eq!(models[1].name(), "x-model");
        assert!(!models[1].checks_all_patterns());
    }

    #[tokio::test]
    async fn send_raw_passes_server_error_through() {
        let transport = FakeTransport::new(200, r#"{ "error": 2 }"#);
        let client = make_client("key", transport.clone());

        let outcome = client.send_raw("INVALID COMMAND", Vec::new()).await;
        assert_eq!(outcome.error, ErrorKind::InvalidCommand);
        assert!(outcome.payload.unwrap().contains_key("error"));

        let (_, params) = transport.last_request();
        assert_eq!(
            params,
            vec![
                ("command".to_owned(), "INVALID COMMAND".to_owned()),
                ("key".to_owned(), "key".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn concurrent_calls_are_independent() {
        let transport = FakeTransport::new(200, r#"{ "error": 0, "code": "0060" }"#);
        let client = make_client("key", transport.clone());

        let (a, b) = tokio::join!(
            client.calc(&KnownRadioModel::RenaultDacia, "Z999", ""),
            client.calc(&KnownRadioModel::RenaultDacia, "Z999", ""),
        );
        assert_eq!(a, b);
        assert_eq!(transport.calls(), 2);
    }

    #[test]
    fn builder_endpoint_override_is_applied() {
        let client = RadioCodeClient::builder("key")
            .endpoint("https://example.invalid/api/v1")
            .timeout(Duration::from_secs(5))
            .user_agent("radio-code-calculator-tests")
            .build()
            .unwrap();
        assert_eq!(client.endpoint, "https://example.invalid/api/v1");
        assert_eq!(client.key.as_str(), "key");

        let client = RadioCodeClient::new("key");
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn builder_rejects_invalid_endpoint() {
        let err = RadioCodeClient::builder("key")
            .endpoint("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, RadioCodeError::InvalidEndpoint { .. }));
    }
}
