//! Property-based tests for the connection registry
//!
//! For any sequence of register/unregister operations, the registry's
//! broadcast target set must equal exactly the connections currently
//! registered minus those unregistered — no duplicates, no leaks — and a
//! broadcast must reach every member of that set.

use proptest::collection::vec;
use proptest::prelude::*;
use tokio::sync::mpsc;
use uuid::Uuid;

use relaysim::backend::relay::registry::{ConnectionId, ConnectionRegistry};

/// One step of a register/unregister interleaving
#[derive(Debug, Clone)]
enum RegistryOp {
    /// Register a fresh connection
    Register,
    /// Unregister a currently registered connection (picked by index)
    UnregisterExisting(usize),
    /// Unregister an id that was never registered
    UnregisterUnknown,
}

fn op_strategy() -> impl Strategy<Value = RegistryOp> {
    prop_oneof![
        3 => Just(RegistryOp::Register),
        2 => any::<usize>().prop_map(RegistryOp::UnregisterExisting),
        1 => Just(RegistryOp::UnregisterUnknown),
    ]
}

/// Outcome of replaying an op sequence against the real registry and a
/// trivial model (an ordered list of live connections).
struct Replay {
    registry_ids: Vec<ConnectionId>,
    model_ids: Vec<ConnectionId>,
    delivered: usize,
    receivers_with_message: usize,
}

async fn replay(ops: Vec<RegistryOp>) -> Replay {
    let registry = ConnectionRegistry::new();
    let mut model: Vec<(ConnectionId, mpsc::UnboundedReceiver<String>)> = Vec::new();

    for op in ops {
        match op {
            RegistryOp::Register => {
                let (id, rx) = registry.register().await;
                model.push((id, rx));
            }
            RegistryOp::UnregisterExisting(index) => {
                if !model.is_empty() {
                    let (id, _rx) = model.remove(index % model.len());
                    registry.unregister(id).await;
                }
            }
            RegistryOp::UnregisterUnknown => {
                registry.unregister(Uuid::new_v4()).await;
            }
        }
    }

    let delivered = registry.broadcast("probe").await;
    let mut receivers_with_message = 0;
    for (_id, rx) in &mut model {
        if matches!(rx.try_recv().as_deref(), Ok("probe")) {
            receivers_with_message += 1;
        }
    }

    Replay {
        registry_ids: registry.connection_ids().await,
        model_ids: model.iter().map(|(id, _)| *id).collect(),
        delivered,
        receivers_with_message,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_registry_tracks_exactly_the_registered_set(ops in vec(op_strategy(), 0..40)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let outcome = runtime.block_on(replay(ops));

        // Target set == registered minus unregistered, in insertion order
        prop_assert_eq!(&outcome.registry_ids, &outcome.model_ids);

        // No duplicates
        let mut deduped = outcome.registry_ids.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), outcome.registry_ids.len());

        // Broadcast reached every live connection and nothing else
        prop_assert_eq!(outcome.delivered, outcome.model_ids.len());
        prop_assert_eq!(outcome.receivers_with_message, outcome.model_ids.len());
    }
}
