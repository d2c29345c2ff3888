//! Fetches a resource from an OAuth2-protected API.
//!
//! ```sh
//! cargo run --example get -- <client-id> <client-secret> <endpoint> \
//!     [--base-url <url>] [--token-url <url>] [--timeout <seconds>]
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use auth_sdk::{ApiClient, DEFAULT_BASE_URL};
use tracing::{info, warn};

#[derive(Debug)]
struct GetArgs {
    client_id: String,
    client_secret: String,
    endpoint: String,
    base_url: String,
    token_url: Option<String>,
    timeout: Duration,
}

impl GetArgs {
    fn parse() -> Result<Self> {
        let mut pargs = pico_args::Arguments::from_env();

        let base_url: Option<String> = pargs
            .opt_value_from_str("--base-url")
            .context("parsing base-url argument")?;

        let token_url = pargs
            .opt_value_from_str("--token-url")
            .context("parsing token-url argument")?;

        let timeout: Option<u64> = pargs
            .opt_value_from_str(["-t", "--timeout"])
            .context("parsing timeout argument")?;

        let client_id = pargs.free_from_str().context("missing <client-id>")?;
        let client_secret = pargs.free_from_str().context("missing <client-secret>")?;
        let endpoint = pargs.free_from_str().context("missing <endpoint>")?;

        let result = Self {
            client_id,
            client_secret,
            endpoint,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token_url,
            timeout: Duration::from_secs(timeout.unwrap_or(30)),
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            warn!(?remaining, "Warning: unused arguments left");
        }
        Ok(result)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let GetArgs {
        client_id,
        client_secret,
        endpoint,
        base_url,
        token_url,
        timeout,
    } = GetArgs::parse()?;

    let mut builder = ApiClient::builder(client_id, client_secret).with_base_url(base_url);
    if let Some(token_url) = token_url {
        builder = builder.with_token_url(token_url)?;
    }
    let client = builder.build()?;

    let token = client.authenticate().await?;
    info!(?token, "authenticated");

    let result = client.get(&endpoint, None, None, Some(timeout)).await?;
    info!(%result, "received");

    Ok(())
}
