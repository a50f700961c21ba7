//! Typed Rust client for the Radio Code Calculator Web API.
//!
//! The service generates car radio unlock codes; the algorithm runs server-side. This
//! crate describes the supported radio models and their input constraints, validates a
//! serial (and optional extra data) offline before any request, and maps the service's
//! answers to a single [`ErrorKind`] taxonomy. The layout follows the usual split: a
//! domain layer of strong types, a transport layer for wire-format details, and a small
//! client layer orchestrating requests.
//!
//! ```rust,no_run
//! use radio_code_calculator::{ErrorKind, KnownRadioModel, RadioCodeClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = RadioCodeClient::new("ABCD-ABCD-ABCD-ABCD");
//!     let model = KnownRadioModel::FordMSeries.descriptor();
//!
//!     if model.validate("123456", None) != ErrorKind::Success {
//!         return;
//!     }
//!
//!     let (error, result) = client.calc(model, "123456", "").await.into_parts();
//!     if let (ErrorKind::Success, Some(result)) = (error, result) {
//!         println!("radio code: {:?}", result.code);
//!     }
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{RadioCodeClient, RadioCodeClientBuilder, RadioCodeError};
pub use domain::{
    ActivationKey, CalcResponse, ErrorKind, KnownRadioModel, LicenseInfo, LicenseType, ModelName,
    Outcome, RadioModel, ValidationError,
};
