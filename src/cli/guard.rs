use std::fmt;

use crate::core::FcmConfig;

/// Reasons to stop before any network activity. Both exit with code 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardError {
    MissingToken,
    UnconfiguredServerKey,
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardError::MissingToken => write!(
                f,
                "❌ Usage: fcm-call <FCM_TOKEN> [CALLER_NAME]\n\
                 \n\
                 Get the FCM token from your app's console output when it starts.\n\
                 Look for the line: '✅ FCM TOKEN RETRIEVED'"
            ),
            GuardError::UnconfiguredServerKey => write!(
                f,
                "❌ ERROR: You need to set your Firebase Server Key!\n\
                 \n\
                 📋 To get your Server Key:\n\
                 1. Go to Firebase Console: https://console.firebase.google.com/\n\
                 2. Select your project\n\
                 3. Go to Project Settings > Cloud Messaging\n\
                 4. Copy the 'Server key' (under Cloud Messaging API (Legacy))\n\
                 5. Export it as FCM_SERVER_KEY or pass it with --server-key\n\
                 \n\
                 ⚠️  WARNING: Keep this key secret! Do not commit it to version control."
            ),
        }
    }
}

impl std::error::Error for GuardError {}

/// Returns the token to send to. The token is checked first so a bare
/// invocation always prints usage.
pub fn check<'a>(token: Option<&'a str>, config: &FcmConfig) -> Result<&'a str, GuardError> {
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or(GuardError::MissingToken)?;

    if !config.is_configured() {
        return Err(GuardError::UnconfiguredServerKey);
    }

    Ok(token)
}
