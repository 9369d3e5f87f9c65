//! Video store binary entry point.

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use video_store::ServiceConfig;

/// Video store CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "video-store")]
#[command(about = "In-memory video catalogue over HTTP/JSON")]
struct Args {
    /// HTTP API listen address.
    #[arg(short = 'l', long, env = "VIDEO_STORE_LISTEN", default_value = "127.0.0.1:3000")]
    listen: SocketAddr,

    /// Start with two demo videos instead of an empty store.
    #[arg(long, env = "VIDEO_STORE_SEED_DEMO_DATA")]
    seed_demo_data: bool,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl From<Args> for ServiceConfig {
    fn from(args: Args) -> Self {
        Self {
            listen: args.listen,
            seed_demo_data: args.seed_demo_data,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    tracing::info!("Starting video store");

    video_store::server::run(args.into()).await
}
