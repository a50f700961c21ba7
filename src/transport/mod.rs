//! Transport layer: wire-format details (form encoding, JSON decoding).

mod calc;
mod envelope;
mod login;
mod models;
mod pattern;

pub use calc::{decode_calc_json_response, encode_calc_form};
pub use envelope::{TransportError, decode_raw_json_response, encode_raw_form};
pub use login::{decode_login_json_response, encode_login_form};
pub use models::{
    decode_info_json_response, decode_list_json_response, encode_info_form, encode_list_form,
};
