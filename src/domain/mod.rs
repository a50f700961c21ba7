//! Domain layer: strong types with validation and invariants (no I/O).

mod catalog;
mod error_kind;
mod model;
mod request;
mod response;
mod validation;
mod value;

pub use catalog::KnownRadioModel;
pub use error_kind::ErrorKind;
pub use model::RadioModel;
pub use request::{CalcRequest, Command, InfoRequest};
pub use response::{CalcResponse, LicenseInfo, Outcome};
pub use validation::ValidationError;
pub use value::{ActivationKey, LicenseType, ModelName};
