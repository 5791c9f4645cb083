pub mod models;
pub mod report;
pub use models::*;

use anyhow::{Context, Error, Result};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::core::FcmConfig;

/// Posts a single message to the FCM send endpoint. Only transport
/// failures and a malformed 200 body are errors; any other status
/// comes back as `SendOutcome::Rejected`.
pub async fn send_call_notification(
    config: &FcmConfig,
    payload: &CallPayload,
) -> Result<SendOutcome, Error> {
    tracing::debug!(
        "POST {} type={:?} call_id={}",
        config.endpoint,
        payload.data,
        payload.call_id()
    );

    // No timeout, the request blocks until the transport gives up
    let response = reqwest::Client::new()
        .post(&config.endpoint)
        .bearer_auth(&config.server_key)
        .header(CONTENT_TYPE, "application/json")
        .json(payload)
        .send()
        .await
        .with_context(|| format!("Failed to reach FCM endpoint {}", config.endpoint))?;

    let status = response.status();
    let text = response.text().await?;
    tracing::debug!("FCM responded with {}: {}", status, text);

    if status != StatusCode::OK {
        return Ok(SendOutcome::Rejected {
            status: status.as_u16(),
            body: text,
        });
    }

    let body: Value = serde_json::from_str(&text)
        .with_context(|| format!("Attempted to parse FCM response as json: {}", text))?;
    let response: FcmResponse = serde_json::from_value(body.clone())
        .with_context(|| "Attempted to read FCM success/failure counters")?;

    if response.failed() {
        tracing::warn!("FCM reported failure: {}", response.first_error());
    }

    Ok(SendOutcome::Accepted { response, body })
}
