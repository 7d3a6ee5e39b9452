use anyhow::Result;

use crate::core::AppConfig;
use crate::provider::{CalendarProvider, NylasClient};

/// Print the consent URL so the OAuth flow can be started without a
/// browser pointed at the server
pub fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    let client = NylasClient::new(&config)?;
    println!(
        "\nOpen the following URL in your browser and authorize access:\n\n{}\n",
        client.authorization_url()
    );
    println!(
        "The provider will redirect to {} with the authorization code.",
        config.nylas_redirect_uri
    );
    Ok(())
}
