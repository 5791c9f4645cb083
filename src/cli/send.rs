use anyhow::Result;

use crate::core::FcmConfig;
use crate::fcm::report::{outcome_report, request_summary};
use crate::fcm::{CallPayload, send_call_notification};

pub async fn run(payload: &CallPayload, config: &FcmConfig) -> Result<()> {
    println!("{}", request_summary(payload));

    let outcome = send_call_notification(config, payload).await?;
    println!("{}", outcome_report(&outcome)?);

    Ok(())
}
