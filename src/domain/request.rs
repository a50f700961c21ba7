use crate::domain::value::ModelName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Web API command (`command`).
pub enum Command {
    Login,
    Calc,
    Info,
    List,
}

impl Command {
    /// Form field name used by the service (`command`).
    pub const FIELD: &'static str = "command";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Calc => "calc",
            Self::Info => "info",
            Self::List => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Parameters of a `calc` request.
///
/// No offline validation happens here; call [`crate::RadioModel::validate`] first if needed.
pub struct CalcRequest {
    radio_model: String,
    serial: String,
    extra: String,
}

impl CalcRequest {
    /// Form field name for the serial number (`serial`).
    pub const SERIAL_FIELD: &'static str = "serial";
    /// Form field name for the extra data (`extra`).
    pub const EXTRA_FIELD: &'static str = "extra";

    pub fn new<M: ModelName + ?Sized>(
        model: &M,
        serial: impl Into<String>,
        extra: impl Into<String>,
    ) -> Self {
        Self {
            radio_model: model.model_name().to_owned(),
            serial: serial.into(),
            extra: extra.into(),
        }
    }

    pub fn radio_model(&self) -> &str {
        &self.radio_model
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub fn extra(&self) -> &str {
        &self.extra
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Parameters of an `info` request.
pub struct InfoRequest {
    radio_model: String,
}

impl InfoRequest {
    pub fn new<M: ModelName + ?Sized>(model: &M) -> Self {
        Self {
            radio_model: model.model_name().to_owned(),
        }
    }

    pub fn radio_model(&self) -> &str {
        &self.radio_model
    }
}
