/**
 * WebSocket Relay Endpoint
 *
 * This module implements the `/ws` endpoint: a persistent bidirectional
 * channel that re-broadcasts every inbound text frame to all connected
 * clients, the sender included.
 *
 * # Connection Lifecycle
 *
 * Each connection moves through `CONNECTING -> OPEN -> CLOSED`:
 *
 * 1. The upgrade completes and the connection is registered with the
 *    `ConnectionRegistry` (CONNECTING -> OPEN).
 * 2. While OPEN, the relay loop awaits the next inbound frame and forwards
 *    text frames unmodified to `ConnectionRegistry::broadcast`.
 * 3. A peer close frame, end of stream, or any transport error closes the
 *    connection (OPEN -> CLOSED): the connection is unregistered exactly
 *    once and its tasks end. Errors other than clean disconnect are treated
 *    identically to disconnect — at this layer the only distinction that
 *    matters is "connection still usable" vs "not".
 *
 * # Frames
 *
 * The relay forwards text frames verbatim with no parsing or validation.
 * Ping/pong is handled by the transport; binary frames are ignored.
 */

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};

use super::registry::ConnectionRegistry;

/// Handle WebSocket upgrade (GET /ws)
///
/// Accepts the upgrade and hands the socket to the per-connection relay
/// loop. Registration with the connection registry happens once the
/// handshake has completed, never before.
pub async fn handle_relay_upgrade(
    ws: WebSocketUpgrade,
    State(registry): State<Arc<ConnectionRegistry>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_relay_socket(socket, registry))
}

/// Per-connection relay loop
///
/// Registers the connection, then multiplexes two directions until the
/// connection closes:
///
/// - outbound: messages queued for this connection by any broadcast are
///   written to the socket
/// - inbound: text frames from the peer are re-broadcast to all registered
///   connections (including this one)
///
/// On exit the connection is unregistered exactly once.
pub async fn handle_relay_socket(socket: WebSocket, registry: Arc<ConnectionRegistry>) {
    let (conn_id, mut outbound) = registry.register().await;
    let (mut ws_tx, mut ws_rx) = socket.split();

    tracing::info!("[Relay] Connection {} open", conn_id);

    loop {
        tokio::select! {
            // Messages queued for this connection by broadcast
            queued = outbound.recv() => {
                match queued {
                    Some(text) => {
                        if let Err(e) = ws_tx.send(Message::Text(text.into())).await {
                            tracing::debug!(
                                "[Relay] Connection {}: send failed, closing: {}",
                                conn_id,
                                e
                            );
                            break;
                        }
                    }
                    // Registry dropped the sender (connection was pruned)
                    None => break,
                }
            }

            // Frames from the peer
            frame = ws_rx.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        registry.broadcast(text.as_str()).await;
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        // Clean disconnect: expected termination, not a failure
                        tracing::info!("[Relay] Connection {}: peer disconnected", conn_id);
                        break;
                    }
                    Some(Err(e)) => {
                        // Transport error: treated the same as a disconnect
                        tracing::info!(
                            "[Relay] Connection {}: transport error, closing: {}",
                            conn_id,
                            e
                        );
                        break;
                    }
                    // Ping/pong handled by the transport; binary ignored
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    registry.unregister(conn_id).await;
    tracing::info!("[Relay] Connection {} closed", conn_id);
}
