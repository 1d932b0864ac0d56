//! Cliprelay CLI: copy on one machine, paste on another.
//!
//! Set CLIPRELAY_SERVER_URL (default http://localhost:8000) and optionally
//! CLIPRELAY_DOWNLOAD_DIR (default ~/Downloads/cliprelay).

use clap::{Parser, Subcommand};
use cliprelay_api_client::ApiClient;
use cliprelay_cli::{describe_materialized, describe_upload, init_tracing};
use cliprelay_core::ClientConfig;
use cliprelay_platform::SystemClipboard;
use cliprelay_sync::{capture, materialize};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "cliprelay", about = "Relay clipboard content through a shared server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload the local clipboard (file reference, image, or text) to the server
    Copy,
    /// Download the server's content into the local clipboard or download directory
    Paste,
    /// Show what the server currently holds
    Status,
    /// Clear the server's clipboard slot
    Clear,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value)?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    dotenvy::dotenv().ok();

    // Every failure surfaces as one line and a non-zero exit.
    if let Err(err) = run().await {
        eprintln!("✗ {}", err);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    let client = ApiClient::new(config.server_url.clone())?;

    match cli.command {
        Commands::Copy => {
            let clipboard = SystemClipboard::new()?;
            let envelope = capture(&clipboard)?;
            let summary = describe_upload(&envelope);
            client.upload(&envelope).await?;
            println!("✓ {}", summary);
        }
        Commands::Paste => {
            let clipboard = SystemClipboard::new()?;
            let envelope = client.download().await?;
            let result = materialize(&envelope, &clipboard, &config.download_dir)?;
            println!("✓ {}", describe_materialized(&result));
        }
        Commands::Status => {
            let status = client.status().await?;
            print_json(&status)?;
        }
        Commands::Clear => {
            client.clear().await?;
            println!("✓ Clipboard data cleared");
        }
    }

    Ok(())
}
