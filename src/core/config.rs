use std::env;

/// Value shipped in place of a real server key. Sending is refused
/// until it has been replaced.
pub const PLACEHOLDER_SERVER_KEY: &str = "YOUR_FIREBASE_SERVER_KEY_HERE";

/// Legacy FCM HTTP send endpoint.
pub const DEFAULT_FCM_ENDPOINT: &str = "https://fcm.googleapis.com/fcm/send";

#[derive(Clone, Debug)]
pub struct FcmConfig {
    pub server_key: String,
    pub endpoint: String,
}

impl FcmConfig {
    /// Explicit values win over `FCM_SERVER_KEY` / `FCM_ENDPOINT`,
    /// which win over the built-in defaults.
    pub fn new(server_key: Option<String>, endpoint: Option<String>) -> Self {
        let server_key = server_key
            .or_else(|| non_empty_var("FCM_SERVER_KEY"))
            .unwrap_or_else(|| PLACEHOLDER_SERVER_KEY.to_string());
        let endpoint = endpoint
            .or_else(|| non_empty_var("FCM_ENDPOINT"))
            .unwrap_or_else(|| DEFAULT_FCM_ENDPOINT.to_string());

        Self {
            server_key,
            endpoint,
        }
    }

    pub fn is_configured(&self) -> bool {
        let key = self.server_key.trim();
        !key.is_empty() && key != PLACEHOLDER_SERVER_KEY
    }
}

impl Default for FcmConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_prefers_explicit_values() {
        let config = FcmConfig::new(
            Some("real-key".to_string()),
            Some("http://localhost:1234/fcm/send".to_string()),
        );
        assert_eq!(config.server_key, "real-key");
        assert_eq!(config.endpoint, "http://localhost:1234/fcm/send");
        assert!(config.is_configured());
    }

    #[test]
    fn it_treats_placeholder_as_unconfigured() {
        let config = FcmConfig {
            server_key: PLACEHOLDER_SERVER_KEY.to_string(),
            endpoint: DEFAULT_FCM_ENDPOINT.to_string(),
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn it_treats_blank_key_as_unconfigured() {
        let config = FcmConfig {
            server_key: "   ".to_string(),
            endpoint: DEFAULT_FCM_ENDPOINT.to_string(),
        };
        assert!(!config.is_configured());
    }
}
