use std::process::ExitCode;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod guard;
pub mod send;

use crate::core::FcmConfig;
use crate::fcm::CallPayload;
use guard::GuardError;

/// Send a test incoming-call push to a device through FCM
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// FCM registration token printed by the app on startup
    fcm_token: Option<String>,

    /// Name shown on the incoming call screen
    caller_name: Option<String>,

    /// Call identifier, defaults to the current time in milliseconds
    #[arg(long)]
    call_id: Option<String>,

    /// Dismiss a ringing call instead of starting one
    #[arg(long, action, default_value = "false", requires = "call_id")]
    cancel: bool,

    /// Firebase server key, overrides FCM_SERVER_KEY
    #[arg(long)]
    server_key: Option<String>,

    /// Send endpoint, overrides FCM_ENDPOINT
    #[arg(long)]
    endpoint: Option<String>,
}

impl Cli {
    pub fn payload(&self, token: &str) -> Result<CallPayload> {
        if self.cancel {
            let call_id = self
                .call_id
                .as_deref()
                .ok_or(anyhow!("--cancel needs the --call-id of the call to dismiss"))?;
            return Ok(CallPayload::call_cancel(token, call_id));
        }
        Ok(CallPayload::incoming_call(
            token,
            self.caller_name.as_deref(),
            self.call_id.as_deref(),
        ))
    }
}

pub async fn run() -> Result<ExitCode> {
    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match execute(args).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast_ref::<GuardError>() {
            Some(guard_error) => {
                println!("{}", guard_error);
                Ok(ExitCode::FAILURE)
            }
            None => Err(e),
        },
    }
}

/// Guard failures come back as a `GuardError` so the caller can print
/// them and exit 1. Transport errors propagate unchanged.
pub async fn execute(args: Cli) -> Result<()> {
    let config = FcmConfig::new(args.server_key.clone(), args.endpoint.clone());
    let token = guard::check(args.fcm_token.as_deref(), &config)?;

    let payload = args.payload(token)?;
    send::run(&payload, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fcm::CallData;

    #[test]
    fn it_parses_positional_arguments() {
        let args = Cli::parse_from(["fcm-call", "device-token", "Alice"]);
        let payload = args.payload("device-token").unwrap();
        assert_eq!(payload.to, "device-token");
        assert_eq!(payload.caller_name(), Some("Alice"));
    }

    #[test]
    fn it_allows_missing_token_for_custom_usage() {
        let args = Cli::parse_from(["fcm-call"]);
        assert!(args.fcm_token.is_none());
    }

    #[test]
    fn it_builds_cancel_payload() {
        let args = Cli::parse_from(["fcm-call", "device-token", "--cancel", "--call-id", "42"]);
        let payload = args.payload("device-token").unwrap();
        assert_eq!(
            payload.data,
            CallData::CallCancel {
                call_id: String::from("42")
            }
        );
    }

    #[test]
    fn it_requires_call_id_with_cancel() {
        let result = Cli::try_parse_from(["fcm-call", "device-token", "--cancel"]);
        assert!(result.is_err());
    }

    fn guard_error(result: Result<()>) -> Option<GuardError> {
        result.err().and_then(|e| e.downcast_ref::<GuardError>().copied())
    }

    #[tokio::test]
    async fn it_stops_without_token() {
        let args = Cli::parse_from(["fcm-call", "--server-key", "real-key"]);
        assert_eq!(
            guard_error(execute(args).await),
            Some(GuardError::MissingToken)
        );
    }

    #[tokio::test]
    async fn it_stops_on_placeholder_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/fcm/send")
            .expect(0)
            .create_async()
            .await;

        let endpoint = format!("{}/fcm/send", server.url());
        let args = Cli::parse_from([
            "fcm-call",
            "device-token",
            "--server-key",
            crate::core::PLACEHOLDER_SERVER_KEY,
            "--endpoint",
            endpoint.as_str(),
        ]);
        assert_eq!(
            guard_error(execute(args).await),
            Some(GuardError::UnconfiguredServerKey)
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn it_reports_non_200_without_error() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/fcm/send")
            .with_status(500)
            .with_body("backend error")
            .create_async()
            .await;

        let endpoint = format!("{}/fcm/send", server.url());
        let args = Cli::parse_from([
            "fcm-call",
            "device-token",
            "--server-key",
            "real-key",
            "--endpoint",
            endpoint.as_str(),
        ]);
        execute(args).await?;
        mock.assert_async().await;
        Ok(())
    }
}
