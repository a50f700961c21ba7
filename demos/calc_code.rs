use std::io;

use radio_code_calculator::{ErrorKind, RadioCodeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("RADIO_CODE_ACTIVATION_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "RADIO_CODE_ACTIVATION_KEY environment variable is required",
        )
    })?;
    let model = std::env::var("RADIO_CODE_MODEL").unwrap_or_else(|_| "ford-m-series".to_owned());
    let serial = std::env::var("RADIO_CODE_SERIAL").unwrap_or_else(|_| "123456".to_owned());
    let extra = std::env::var("RADIO_CODE_EXTRA").unwrap_or_default();

    let client = RadioCodeClient::new(key);
    let outcome = client.calc(model.as_str(), &serial, &extra).await;
    let payload = outcome.payload.unwrap_or_default();

    match outcome.error {
        ErrorKind::Success => println!("radio code: {}", payload.code.unwrap_or_default()),
        ErrorKind::InvalidSerialLength => println!(
            "invalid serial length (expected {:?} characters)",
            payload.serial_max_len
        ),
        ErrorKind::InvalidSerialPattern => println!(
            "serial does not match {:?}",
            payload.serial_regex_pattern
        ),
        ErrorKind::InvalidExtraLength => println!(
            "invalid extra data length (expected {:?} characters)",
            payload.extra_max_len
        ),
        ErrorKind::InvalidExtraPattern => println!(
            "extra data does not match {:?}",
            payload.extra_regex_pattern
        ),
        error => println!("calculation failed: {error}"),
    }

    Ok(())
}
