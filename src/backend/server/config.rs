/**
 * Server Configuration
 *
 * This module handles loading of server configuration from environment
 * variables, with sensible defaults for local development.
 *
 * # Configuration Sources
 *
 * | Variable               | Default        | Meaning                         |
 * |------------------------|----------------|---------------------------------|
 * | `SERVER_PORT`          | `8000`         | HTTP listen port                |
 * | `DIAGRAM_FILE`         | `diagram.json` | Diagram document file           |
 * | `STATIC_DIR`           | `public`       | Static frontend directory       |
 * | `SIMULATION_TICK_SECS` | `5`            | Simulation tick interval (secs) |
 *
 * # Error Handling
 *
 * Malformed values are logged and fall back to the default; configuration
 * never prevents server startup.
 */

use std::path::PathBuf;
use std::time::Duration;

/// Default HTTP listen port
const DEFAULT_PORT: u16 = 8000;

/// Default simulation tick interval in seconds
const DEFAULT_TICK_SECS: u64 = 5;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub port: u16,
    /// Path of the diagram document file
    pub diagram_file: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Simulation tick interval
    pub tick_interval: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables use their defaults; malformed values are logged and
    /// fall back to the default.
    pub fn from_env() -> Self {
        let port = env_parsed("SERVER_PORT", DEFAULT_PORT);
        let diagram_file =
            PathBuf::from(std::env::var("DIAGRAM_FILE").unwrap_or_else(|_| "diagram.json".into()));
        let static_dir =
            PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".into()));
        let tick_interval =
            Duration::from_secs(env_parsed("SIMULATION_TICK_SECS", DEFAULT_TICK_SECS));

        Self {
            port,
            diagram_file,
            static_dir,
            tick_interval,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            diagram_file: PathBuf::from("diagram.json"),
            static_dir: PathBuf::from("public"),
            tick_interval: Duration::from_secs(DEFAULT_TICK_SECS),
        }
    }
}

/// Read an environment variable and parse it, logging and defaulting on
/// malformed values.
fn env_parsed<T: std::str::FromStr + std::fmt::Display + Copy>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Malformed {} value {:?}, falling back to {}",
                name,
                raw,
                default
            );
            default
        }),
        Err(_) => default,
    }
}
