use std::process::ExitCode;

use anyhow::Result;
use fcm_call::cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    cli::run().await
}
