//! `pokedex-healthcheck`: container health probe.
//!
//! GETs `/health` on the configured host and port. Exits 0 on HTTP 200 and
//! 1 on anything else, including timeouts.

use std::process::ExitCode;
use std::time::Duration;

use pokedex_api::config::ServerConfig;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match probe().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Health check failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn probe() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    let host = match config.host.as_str() {
        "0.0.0.0" | "::" => "127.0.0.1",
        other => other,
    };
    let url = format!("http://{host}:{}/health", config.port);

    let client = reqwest::Client::builder().timeout(PROBE_TIMEOUT).build()?;
    let response = client.get(&url).send().await?;

    anyhow::ensure!(
        response.status() == reqwest::StatusCode::OK,
        "{url} returned {}",
        response.status()
    );
    Ok(())
}
