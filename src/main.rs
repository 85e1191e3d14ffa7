//! graph-probe - connectivity check for the Graph client
//!
//! Loads the configuration, fetches `/me` and `/me/presence`, and logs the
//! result. Useful to verify a token and base URL before wiring the library
//! into a bot.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `GRAPH_ACCESS_TOKEN`: bearer token
//! - `GRAPH_BASE_URL`: optional, defaults to Graph v1.0
//!
//! # Usage
//!
//! ```bash
//! GRAPH_ACCESS_TOKEN=eyJ0eXAi... RUST_LOG=graph_cards=debug ./graph-probe
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use graph_cards::config::Config;
use graph_cards::graph::{GetQuery, MeClient, ODataQuery};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("graph_cards=info,graph_probe=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("graph-probe v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(base_url = %config.base_url, product = %config.product, "Configuration loaded");

    let me = MeClient::new(&config).context("Failed to create Graph client")?;

    let select = GetQuery::new().add_select(["displayName", "userPrincipalName", "mail"]);
    let user = me
        .get(Some(&select), None)
        .await
        .context("GET /me failed; check the token and base URL")?;
    tracing::info!(user = user.display(), "Signed in");

    match me.presence().get(None).await {
        Ok(presence) => tracing::info!(
            availability = presence.display_availability(),
            activity = presence.activity.as_deref().unwrap_or("-"),
            "Presence"
        ),
        Err(e) => tracing::warn!(
            error = %e.sanitized_display(config.access_token()),
            "Presence unavailable; the token may lack Presence.Read"
        ),
    }

    match me.events().list(Some(&ODataQuery::new().with_top(1)), None).await {
        Ok(events) => tracing::info!(count = events.len(), "Calendar reachable"),
        Err(e) => tracing::warn!(
            error = %e.sanitized_display(config.access_token()),
            "Calendar unavailable; the token may lack Calendars.Read"
        ),
    }

    Ok(())
}
