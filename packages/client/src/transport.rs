//! WebSocket transport driver.
//!
//! Owns the socket on a spawned task and converts socket activity into
//! [`TransportEvent`]s. A connection attempt that fails is not an error
//! here: it surfaces as a `Closed` event, the same as a connection that
//! opened and later dropped.

use futures_util::{SinkExt, StreamExt};
use kaiwa_core::session::{Identity, TransportEvent};
use reqwest::Url;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

/// Write half of a spawned transport.
///
/// Dropping the handle closes the outbound channel, which makes the task
/// send a close frame and wind down.
pub struct TransportHandle {
    outbound: mpsc::UnboundedSender<String>,
}

impl TransportHandle {
    /// Queue wire text for delivery.
    pub fn send(&self, wire: String) {
        if self.outbound.send(wire).is_err() {
            tracing::warn!("transport task is gone; dropping outbound frame");
        }
    }
}

/// Spawn the transport task for one connection attempt.
///
/// Every lifecycle edge arrives on `events`: `Opened` once the socket is
/// up, one `Frame` per inbound text frame, and a final `Closed` when the
/// socket ends or the attempt fails.
pub fn spawn(
    endpoint: Url,
    identity: &Identity,
    events: mpsc::UnboundedSender<TransportEvent>,
) -> TransportHandle {
    let url = connect_url(&endpoint, identity);
    let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
    tokio::spawn(run(url, outbound_rx, events));
    TransportHandle {
        outbound: outbound_tx,
    }
}

/// Connection URL: the endpoint with the one-time token and username added
/// as query parameters.
fn connect_url(endpoint: &Url, identity: &Identity) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("otp", identity.token().as_str())
        .append_pair("username", identity.username().as_str());
    url
}

async fn run(
    url: Url,
    mut outbound: mpsc::UnboundedReceiver<String>,
    events: mpsc::UnboundedSender<TransportEvent>,
) {
    let (socket, _) = match connect_async(url.as_str()).await {
        Ok(pair) => pair,
        Err(e) => {
            tracing::warn!("connection attempt failed: {}", e);
            let _ = events.send(TransportEvent::Closed);
            return;
        }
    };
    if events.send(TransportEvent::Opened).is_err() {
        return;
    }

    let (mut sink, mut stream) = socket.split();
    loop {
        tokio::select! {
            outgoing = outbound.recv() => match outgoing {
                Some(wire) => {
                    if let Err(e) = sink.send(Message::Text(wire.into())).await {
                        tracing::warn!("send failed: {}", e);
                        break;
                    }
                }
                None => {
                    // Driver dropped the handle: close politely and stop.
                    let _ = sink.send(Message::Close(None)).await;
                    break;
                }
            },
            incoming = stream.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    if events
                        .send(TransportEvent::Frame(text.as_str().to_owned()))
                        .is_err()
                    {
                        break;
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {
                    // Binary and ping/pong frames carry nothing for us.
                }
                Some(Err(e)) => {
                    tracing::warn!("receive failed: {}", e);
                    break;
                }
            },
        }
    }
    let _ = events.send(TransportEvent::Closed);
}
