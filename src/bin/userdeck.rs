use anyhow::Result;
use std::process::ExitCode;
use userdeck::cli;

// Main function
#[tokio::main]
async fn main() -> Result<ExitCode> {
    let action = cli::start()?;

    action.execute().await
}
