//! Tandem - Main Entry Point
//!
//! One-shot batch comparator: loads two endpoint descriptors, invokes each
//! endpoint once, and exits zero only when both responses are identical.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tandem_application::{RunComparison, RunComparisonInput};
use tandem_infrastructure::{ReqwestHttpClient, TokioFileSystem, YamlDescriptorRepository};

/// Verifies that two declaratively described HTTP endpoints produce
/// identical responses.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the first endpoint descriptor
    #[arg(default_value = "endpoints/first.yml")]
    first: PathBuf,

    /// Path to the second endpoint descriptor
    #[arg(default_value = "endpoints/second.yml")]
    second: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let client = match ReqwestHttpClient::new() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("failed to initialize HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let repository = YamlDescriptorRepository::new(TokioFileSystem::new());
    let run = RunComparison::new(repository, Arc::new(client));

    let input = RunComparisonInput {
        first: args.first,
        second: args.second,
    };

    match run.execute(input).await {
        Ok(report) => {
            tracing::info!(
                first = %report.first_url,
                second = %report.second_url,
                status = %report.status,
                "endpoints are equivalent"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
