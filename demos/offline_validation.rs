use std::process::ExitCode;

use radio_code_calculator::{ErrorKind, KnownRadioModel, RadioCodeClient};

#[tokio::main]
async fn main() -> ExitCode {
    let key = std::env::var("RADIO_CODE_ACTIVATION_KEY").unwrap_or_default();
    let serial = std::env::var("RADIO_CODE_SERIAL").unwrap_or_else(|_| "123456".to_owned());
    let model = KnownRadioModel::FordMSeries.descriptor();

    println!(
        "{} expects a serial of {} characters matching {}",
        model.name(),
        model.serial_max_len(),
        model.serial_regex_pattern()
    );

    let error = model.validate(&serial, None);
    if error != ErrorKind::Success {
        println!("rejected offline: {error}");
        return ExitCode::FAILURE;
    }

    let client = RadioCodeClient::new(key);
    let outcome = client.calc(model, &serial, "").await;
    match (outcome.error, outcome.payload.and_then(|payload| payload.code)) {
        (ErrorKind::Success, Some(code)) => {
            println!("radio code: {code}");
            ExitCode::SUCCESS
        }
        (error, _) => {
            println!("calculation failed: {error}");
            ExitCode::FAILURE
        }
    }
}
