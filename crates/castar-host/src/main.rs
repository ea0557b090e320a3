// SPDX-License-Identifier: MIT
//
// Development host for the Castar bridge.
//
// Plays the role the application shell plays in production: registers
// the bridge and delivers method calls to it. Here the channel is
// line-delimited JSON on stdin/stdout — one `MethodCall` per input
// line, one `MethodReply` per output line — which is enough to exercise
// the full contract from a terminal or a test harness.

use std::path::Path;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use castar_bridge::Dispatcher;
use castar_core::error::Result;
use castar_core::{BridgeConfig, CastarError, MethodCall, MethodReply};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => BridgeConfig::default(),
    };

    let runtime = castar_sdk::default_runtime(&config);
    let channel = config.channel_name.clone();
    let mut dispatcher = Dispatcher::new(config, runtime);

    info!(
        channel,
        runtime = dispatcher.runtime_name(),
        "Castar bridge host ready"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let reply = match serde_json::from_str::<MethodCall>(&line) {
            Ok(call) => dispatcher.handle(call).await,
            Err(err) => {
                warn!("malformed method call: {err}");
                MethodReply::from(CastarError::InvalidArguments(format!(
                    "malformed method call: {err}"
                )))
            }
        };
        let mut out = serde_json::to_vec(&reply)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    info!("input closed, shutting down");
    Ok(())
}

/// Load the bridge configuration from a JSON file.
///
/// A missing file yields the defaults (first run); an unreadable or
/// malformed file is a hard error rather than a silent fallback.
fn load_config(path: &Path) -> Result<BridgeConfig> {
    if !path.exists() {
        info!(path = %path.display(), "no config file, using defaults");
        return Ok(BridgeConfig::default());
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|err| CastarError::Config(format!("{}: {err}", path.display())))
}
