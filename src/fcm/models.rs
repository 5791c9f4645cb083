use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CALLER_NAME: &str = "Test Caller";

// Placeholder values until the app's full call schema is exercised
const PLACEHOLDER_CALLER_ID: &str = "+1234567890";
const PLACEHOLDER_AVATAR: &str = "";

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Only a `data` block is sent, never a `notification` block. A
/// notification block makes the OS show a heads-up banner instead of
/// waking the app's message handler, which is what renders the call UI.
pub enum CallData {
    #[serde(rename_all = "camelCase")]
    IncomingCall {
        call_id: String,
        caller_name: String,
        caller_id: String,
        // FCM data values must be strings
        is_video: String,
        avatar: String,
    },
    #[serde(rename_all = "camelCase")]
    CallCancel { call_id: String },
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CallPayload {
    pub to: String,
    pub priority: String,
    pub data: CallData,
}

impl CallPayload {
    /// Builds an `incoming_call` message. The call id falls back to
    /// the current time in milliseconds.
    pub fn incoming_call(token: &str, caller_name: Option<&str>, call_id: Option<&str>) -> Self {
        Self {
            to: token.to_string(),
            priority: String::from("high"),
            data: CallData::IncomingCall {
                call_id: call_id.map(|s| s.to_string()).unwrap_or_else(generate_call_id),
                caller_name: caller_name.unwrap_or(DEFAULT_CALLER_NAME).to_string(),
                caller_id: PLACEHOLDER_CALLER_ID.to_string(),
                is_video: String::from("false"),
                avatar: PLACEHOLDER_AVATAR.to_string(),
            },
        }
    }

    /// Builds a `call_cancel` message that dismisses a ringing call.
    pub fn call_cancel(token: &str, call_id: &str) -> Self {
        Self {
            to: token.to_string(),
            priority: String::from("high"),
            data: CallData::CallCancel {
                call_id: call_id.to_string(),
            },
        }
    }

    pub fn call_id(&self) -> &str {
        match &self.data {
            CallData::IncomingCall { call_id, .. } => call_id,
            CallData::CallCancel { call_id } => call_id,
        }
    }

    pub fn caller_name(&self) -> Option<&str> {
        match &self.data {
            CallData::IncomingCall { caller_name, .. } => Some(caller_name),
            CallData::CallCancel { .. } => None,
        }
    }
}

pub fn generate_call_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Per-recipient entry in the `results` array of a send response
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FcmResult {
    pub message_id: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FcmResponse {
    pub success: Option<u64>,
    pub failure: Option<u64>,
    #[serde(default)]
    pub results: Vec<FcmResult>,
}

impl FcmResponse {
    pub fn delivered(&self) -> bool {
        self.success.is_some_and(|n| n > 0)
    }

    pub fn failed(&self) -> bool {
        self.failure.is_some_and(|n| n > 0)
    }

    pub fn first_error(&self) -> &str {
        self.results
            .first()
            .and_then(|r| r.error.as_deref())
            .unwrap_or("Unknown error")
    }
}

/// What came back from a single send.
#[derive(Debug, Clone)]
pub enum SendOutcome {
    /// HTTP 200. `body` keeps the raw JSON for display.
    Accepted { response: FcmResponse, body: Value },
    /// Any other status, with the body exactly as received.
    Rejected { status: u16, body: String },
}
