use std::io;

use radio_code_calculator::{ErrorKind, LicenseType, RadioCodeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("RADIO_CODE_ACTIVATION_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "RADIO_CODE_ACTIVATION_KEY environment variable is required",
        )
    })?;

    let client = RadioCodeClient::new(key);
    match client.login().await.into_parts() {
        (ErrorKind::Success, Some(license)) => {
            let license_type = match license.license_type {
                LicenseType::Personal => "personal".to_owned(),
                LicenseType::Company => "company".to_owned(),
                LicenseType::Unknown(code) => format!("unknown ({code})"),
            };
            println!("activation status: {}", license.activation_status);
            println!("owner: {}", license.user_name);
            println!("license type: {license_type}");
            println!("expiration date: {}", license.expiration_date);
        }
        (ErrorKind::InvalidLicense, _) => println!("invalid license key"),
        (error, _) => println!("login failed: {error}"),
    }

    Ok(())
}
