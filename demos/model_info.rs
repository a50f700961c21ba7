use radio_code_calculator::{ErrorKind, RadioCodeClient};

#[tokio::main]
async fn main() {
    let key = std::env::var("RADIO_CODE_ACTIVATION_KEY").unwrap_or_default();
    let model = std::env::var("RADIO_CODE_MODEL").unwrap_or_else(|_| "ford-m-series".to_owned());

    let client = RadioCodeClient::new(key);
    match client.info(model.as_str()).await.into_parts() {
        (ErrorKind::Success, Some(model)) => {
            println!("radio model: {}", model.name());
            println!("serial length: {}", model.serial_max_len());
            println!("serial pattern: {}", model.serial_regex_pattern());
            if let Some(pattern) = model.extra_regex_pattern() {
                println!("extra length: {}", model.extra_max_len());
                println!("extra pattern: {pattern}");
            }
        }
        (error, _) => println!("info failed: {error}"),
    }
}
