use reqwest::Client;
use serde::Deserialize;
use tokio::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::BotError;

pub const DEFAULT_PROFILE_API: &str = "https://sessionserver.mojang.com";

const RETRY_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    name: Option<String>,
}

/// Resolve an undashed player uuid to its current display name via the
/// session-server profile endpoint. `retries` extra attempts are made after
/// a failure, with a short fixed delay in between; 0 keeps it single-shot.
pub async fn lookup_player_name(
    client: &Client,
    api_base: &Url,
    uuid: &str,
    retries: u32,
) -> Result<String, BotError> {
    let mut attempt = 0;
    loop {
        match fetch_profile_name(client, api_base, uuid).await {
            Ok(name) => return Ok(name),
            Err(err) if attempt < retries => {
                attempt += 1;
                warn!(
                    "Profile lookup for {} failed (attempt {}/{}): {}",
                    uuid,
                    attempt,
                    retries + 1,
                    err
                );
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(err) => return Err(err),
        }
    }
}

async fn fetch_profile_name(client: &Client, api_base: &Url, uuid: &str) -> Result<String, BotError> {
    let lookup_failed = |reason: String| BotError::NameLookupFailed {
        uuid: uuid.to_string(),
        reason,
    };

    let endpoint = api_base
        .join(&format!("/session/minecraft/profile/{uuid}"))
        .map_err(|err| lookup_failed(format!("invalid profile endpoint: {err}")))?;
    debug!("Profile lookup endpoint: {}", endpoint);

    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|err| lookup_failed(err.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(lookup_failed(format!("status {status}: {body}")));
    }

    let profile: ProfileResponse = response
        .json()
        .await
        .map_err(|err| lookup_failed(format!("unparseable profile response: {err}")))?;

    profile
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| lookup_failed("profile response has no name".to_string()))
}
