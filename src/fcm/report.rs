//! Console text for a send: what is about to go out and what came back.

use anyhow::Result;

use super::models::{CallData, CallPayload, SendOutcome};

pub const RULE: &str = "═══════════════════════════════════════════════════════════";

const PREVIEW_CHARS: usize = 20;

/// First and last 20 characters of a device token. Short tokens are
/// shown in full on both sides.
pub fn token_preview(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let head: String = chars.iter().take(PREVIEW_CHARS).collect();
    let tail: String = chars[chars.len().saturating_sub(PREVIEW_CHARS)..]
        .iter()
        .collect();
    format!("{}...{}", head, tail)
}

pub fn request_summary(payload: &CallPayload) -> String {
    let mut lines = vec![RULE.to_string()];
    match &payload.data {
        CallData::IncomingCall { caller_name, .. } => {
            lines.push(String::from("🚀 Sending FCM Notification"));
            lines.push(RULE.to_string());
            lines.push(format!("   To Token: {}", token_preview(&payload.to)));
            lines.push(format!("   Caller Name: {}", caller_name));
        }
        CallData::CallCancel { .. } => {
            lines.push(String::from("🚫 Sending FCM Call Cancel"));
            lines.push(RULE.to_string());
            lines.push(format!("   To Token: {}", token_preview(&payload.to)));
        }
    }
    lines.push(format!("   Call ID: {}", payload.call_id()));
    lines.push(RULE.to_string());
    lines.join("\n")
}

pub fn outcome_report(outcome: &SendOutcome) -> Result<String> {
    let mut lines = Vec::new();
    match outcome {
        SendOutcome::Accepted { response, body } => {
            lines.push(String::from("✅ Notification sent successfully!"));
            lines.push(format!("   Response: {}", serde_json::to_string_pretty(body)?));
            lines.push(RULE.to_string());
            if response.delivered() {
                lines.push(String::from("✅ FCM confirmed delivery"));
            } else if response.failed() {
                lines.push(String::from("❌ FCM reported failure:"));
                lines.push(format!("   {}", response.first_error()));
            }
        }
        SendOutcome::Rejected { status, body } => {
            lines.push(String::from("❌ Failed to send notification"));
            lines.push(format!("   Status Code: {}", status));
            lines.push(format!("   Response: {}", body));
            lines.push(RULE.to_string());
        }
    }
    Ok(lines.join("\n"))
}
