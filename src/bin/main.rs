use pelt::*;

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Url to send requests to
    #[arg(long, default_value = "http://localhost:8000/api/v1/encode")]
    url: String,

    /// Path of the output file (keep empty to print to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Duration between each request, in milliseconds
    #[arg(short, long, default_value_t = 500)]
    duration: u64,

    /// Amount of requests to be sent
    #[arg(short = 'n', long = "requests", default_value_t = 5)]
    requests: u64,

    /// Amount of concurrent workers
    #[arg(short, long, default_value_t = 1)]
    parallelism: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = model::Config {
        url: args.url,
        output: args.output,
        delay: Duration::from_millis(args.duration),
        requests: args.requests,
        parallelism: args.parallelism,
    }
    .clamped();

    info!(
        url = %config.url,
        requests = config.requests,
        parallelism = config.parallelism,
        delay_ms = config.delay.as_millis() as u64,
        "starting run"
    );

    let summary = worker::run(&config).await?;
    summary.write(config.output.as_deref())?;

    Ok(())
}
