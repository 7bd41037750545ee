/**
 * Connection Registry
 *
 * This module tracks the set of currently-open WebSocket connections and
 * implements broadcast-to-all. It is the only piece of state mutated from
 * multiple concurrent contexts: each relay task registers/unregisters its
 * own connection, and the simulation ticker traverses the set on every
 * emitted tick.
 *
 * # Ordering
 *
 * The registry is an ordered collection: insertion order is broadcast order.
 * This is not semantically required by the relay, but it makes delivery
 * deterministic and therefore testable.
 *
 * # Failure Isolation
 *
 * A send failure to one connection (peer task gone, channel closed) must
 * never abort delivery to the remaining connections. Failing connections
 * are pruned from the registry after the broadcast pass.
 */

use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

/// Unique identifier for one registered connection.
pub type ConnectionId = Uuid;

/// Per-connection sender half; the relay task owns the receiver.
///
/// Unbounded by design: broadcast applies no backpressure, so a slow
/// consumer queues messages rather than delaying or dropping delivery to
/// other connections.
pub type ConnectionSender = mpsc::UnboundedSender<String>;

/// One registered connection: its id and the sender used to reach it.
#[derive(Debug, Clone)]
struct RegisteredConnection {
    id: ConnectionId,
    sender: ConnectionSender,
}

/// Registry of live WebSocket connections
///
/// Supports register, unregister, and broadcast-to-all. All methods take
/// `&self`; interior mutability is provided by `tokio::sync::RwLock` so the
/// registry can be shared across relay tasks and the simulation ticker via
/// `Arc`.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    /// Registered connections in insertion order (= broadcast order)
    connections: RwLock<Vec<RegisteredConnection>>,
}

impl ConnectionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(Vec::new()),
        }
    }

    /// Register a new connection
    ///
    /// Creates the connection's delivery channel, appends the sender to the
    /// registry, and returns the connection id together with the receiver
    /// half. The caller (the relay task) owns the receiver for the lifetime
    /// of the connection; dropping it is what makes subsequent broadcasts
    /// to this connection fail and prune it.
    ///
    /// # Returns
    ///
    /// `(id, receiver)` - the registry-assigned connection id and the
    /// receiving end of the connection's message queue
    pub async fn register(&self) -> (ConnectionId, mpsc::UnboundedReceiver<String>) {
        let id = Uuid::new_v4();
        let (sender, receiver) = mpsc::unbounded_channel();

        let mut connections = self.connections.write().await;
        connections.push(RegisteredConnection { id, sender });
        tracing::debug!(
            "[Relay] Connection {} registered (active={})",
            id,
            connections.len()
        );

        (id, receiver)
    }

    /// Unregister a connection by id
    ///
    /// Removes the connection if present; does nothing if absent. Safe to
    /// call twice, or for an id that was never registered.
    pub async fn unregister(&self, id: ConnectionId) {
        let mut connections = self.connections.write().await;
        let before = connections.len();
        connections.retain(|conn| conn.id != id);
        if connections.len() < before {
            tracing::debug!(
                "[Relay] Connection {} unregistered (active={})",
                id,
                connections.len()
            );
        }
    }

    /// Broadcast a message to all registered connections
    ///
    /// Delivery iterates a snapshot of the registry taken at the start of
    /// the call, in registration order, so concurrent register/unregister
    /// cannot corrupt iteration or cause skipped/duplicated delivery. A
    /// failed send (receiver dropped — the peer's relay task is gone) is
    /// isolated: remaining connections still receive the message, and the
    /// failing connection is unregistered afterwards.
    ///
    /// # Returns
    ///
    /// Number of connections the message was delivered to
    pub async fn broadcast(&self, message: &str) -> usize {
        let snapshot: Vec<RegisteredConnection> = {
            let connections = self.connections.read().await;
            connections.clone()
        };

        if snapshot.is_empty() {
            return 0;
        }

        let mut delivered = 0;
        let mut dead = Vec::new();
        for conn in &snapshot {
            match conn.sender.send(message.to_string()) {
                Ok(()) => delivered += 1,
                Err(_) => {
                    // Receiver dropped: the connection's task already ended.
                    tracing::debug!("[Relay] Dropping dead connection {} from broadcast", conn.id);
                    dead.push(conn.id);
                }
            }
        }

        for id in dead {
            self.unregister(id).await;
        }

        tracing::debug!("[Relay] Broadcast delivered to {} connection(s)", delivered);
        delivered
    }

    /// Number of currently registered connections
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Ids of currently registered connections, in registration order
    pub async fn connection_ids(&self) -> Vec<ConnectionId> {
        self.connections.read().await.iter().map(|c| c.id).collect()
    }

    /// Create a new registry wrapped for sharing across tasks
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}
