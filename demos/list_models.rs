use radio_code_calculator::{ErrorKind, RadioCodeClient};

#[tokio::main]
async fn main() {
    let key = std::env::var("RADIO_CODE_ACTIVATION_KEY").unwrap_or_default();

    let client = RadioCodeClient::new(key);
    match client.list().await.into_parts() {
        (ErrorKind::Success, Some(models)) => {
            println!("supported radio models: {}", models.len());
            for model in models {
                println!(
                    "{} (serial {} chars, {})",
                    model.name(),
                    model.serial_max_len(),
                    model.serial_regex_pattern()
                );
            }
        }
        (error, _) => println!("list failed: {error}"),
    }
}
