use chrono::Local;
use reqwest::Client;
use serde::Serialize;
use tokio::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::BotError;
use crate::player::{PlayerRecord, sort_players};

const BOT_NAME: &str = "sweatboard";
const RETRY_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct Embed {
    pub title: String,
    pub footer: EmbedFooter,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Build the leaderboard embed: players ranked by play time, names and
/// playtimes as two side-by-side columns, the posting date in the bot name.
pub fn build_leaderboard_payload(players: &[PlayerRecord], date: &str) -> WebhookPayload {
    let ranked = sort_players(players);
    let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
    let times: Vec<String> = ranked
        .iter()
        .map(|p| format!("`{}`", p.display_time))
        .collect();

    WebhookPayload {
        embeds: vec![Embed {
            title: "Playtime Leaderboard :scroll:".to_string(),
            footer: EmbedFooter {
                text: format!("posted by {BOT_NAME}"),
            },
            fields: vec![
                EmbedField {
                    name: "Username".to_string(),
                    value: names.join("\n"),
                    inline: true,
                },
                EmbedField {
                    name: "Playtime".to_string(),
                    value: times.join("\n"),
                    inline: true,
                },
            ],
        }],
        username: format!("{BOT_NAME} - {date}"),
    }
}

/// Post the leaderboard to the webhook. `retries` extra attempts are made
/// after a failure; the payload is built once and reused.
pub async fn post_leaderboard(
    client: &Client,
    webhook_url: &Url,
    players: &[PlayerRecord],
    retries: u32,
) -> Result<(), BotError> {
    let date = Local::now().format("%d.%m.%Y").to_string();
    let payload = build_leaderboard_payload(players, &date);

    let mut attempt = 0;
    loop {
        match post_payload(client, webhook_url, &payload).await {
            Ok(()) => return Ok(()),
            Err(err) if attempt < retries => {
                attempt += 1;
                warn!(
                    "Webhook post failed (attempt {}/{}): {}",
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

async fn post_payload(
    client: &Client,
    webhook_url: &Url,
    payload: &WebhookPayload,
) -> Result<(), BotError> {
    debug!("Posting leaderboard to {}", webhook_url);
    let response = client
        .post(webhook_url.clone())
        .json(payload)
        .send()
        .await
        .map_err(|err| BotError::NotificationDeliveryFailed(err.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(BotError::NotificationDeliveryFailed(format!(
            "status {status}: {body}"
        )));
    }

    Ok(())
}
