//! Test server bootstrap
//!
//! Spawns the full application (router + simulation ticker) against a
//! temporary diagram file on an ephemeral port, and hands the test direct
//! access to the shared state so it can observe the connection registry.

use std::net::SocketAddr;
use std::time::Duration;

use relaysim::backend::diagram::store::DiagramStore;
use relaysim::backend::relay::registry::ConnectionRegistry;
use relaysim::backend::routes::router::create_router;
use relaysim::backend::server::config::ServerConfig;
use relaysim::backend::server::state::AppState;
use relaysim::backend::simulation::state::SimulationState;
use relaysim::backend::simulation::ticker::spawn_simulation_ticker;

/// Tick interval used by test servers: short enough that simulation tests
/// finish quickly, long enough to observe "nothing happened" windows.
pub const TEST_TICK: Duration = Duration::from_millis(100);

/// A running test server
pub struct TestApp {
    /// Address the server is listening on
    pub addr: SocketAddr,
    /// The application state backing the server
    pub state: AppState,
    // Held so the diagram file outlives the test
    _diagram_dir: tempfile::TempDir,
}

impl TestApp {
    /// Base URL for HTTP requests
    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// URL for the relay WebSocket endpoint
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// Wait until the registry holds exactly `expected` connections.
    ///
    /// Registration and pruning happen in the server's relay tasks, so
    /// tests poll instead of racing them.
    pub async fn wait_for_connection_count(&self, expected: usize) {
        for _ in 0..200 {
            if self.state.registry.connection_count().await == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!(
            "registry never reached {} connection(s), has {}",
            expected,
            self.state.registry.connection_count().await
        );
    }
}

/// Spawn the application on an ephemeral port
///
/// Uses a fresh temporary diagram file and the short test tick interval.
/// The ticker is spawned exactly as in production; it stays silent until a
/// test activates the simulation.
pub async fn spawn_app() -> TestApp {
    let diagram_dir = tempfile::tempdir().expect("create tempdir");
    let config = ServerConfig {
        port: 0,
        diagram_file: diagram_dir.path().join("diagram.json"),
        static_dir: diagram_dir.path().join("public"),
        tick_interval: TEST_TICK,
    };

    let registry = ConnectionRegistry::shared();
    let simulation = SimulationState::new();
    let diagram = DiagramStore::new(config.diagram_file.clone());
    let state = AppState::new(registry.clone(), simulation.clone(), diagram);

    spawn_simulation_ticker(registry, simulation, config.tick_interval);

    let app = create_router(state.clone(), &config);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });

    TestApp {
        addr,
        state,
        _diagram_dir: diagram_dir,
    }
}
