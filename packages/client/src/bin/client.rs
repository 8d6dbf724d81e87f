//! Terminal chat client for the Kaiwa server.
//!
//! Logs in over HTTP, then keeps one WebSocket session per login.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin kaiwa-client
//! ```

use clap::Parser;
use kaiwa_client::Config;
use kaiwa_shared::setup_logger;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    // Run the client
    let config = Config::parse();
    if let Err(e) = kaiwa_client::run(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
