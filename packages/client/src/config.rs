//! Command line configuration.

use clap::Parser;

/// Terminal chat client for a Kaiwa server.
#[derive(Debug, Parser)]
#[command(name = "kaiwa-client", version, about)]
pub struct Config {
    /// Base URL of the login API
    #[arg(long, default_value = "http://localhost:8000")]
    pub api_url: String,

    /// WebSocket endpoint for the chat stream
    #[arg(long, default_value = "ws://localhost:8000/ws")]
    pub ws_url: String,

    /// Username to pre-fill at the login prompt
    #[arg(long)]
    pub username: Option<String>,
}
