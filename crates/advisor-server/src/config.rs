//! Server Configuration

use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;
const DEFAULT_SESSION_SWEEP_SECS: u64 = 60;

/// Process-level settings read from the environment
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: String,

    /// Directory holding the compiled WASM frontend
    pub static_dir: String,

    /// Sessions untouched for this long are dropped
    pub session_idle_timeout: Duration,

    /// How often the idle sweep runs
    pub session_sweep_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            static_dir: DEFAULT_STATIC_DIR.into(),
            session_idle_timeout: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
            session_sweep_interval: Duration::from_secs(DEFAULT_SESSION_SWEEP_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into()),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.into()),
            session_idle_timeout: secs_from_env("SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS),
            session_sweep_interval: secs_from_env("SESSION_SWEEP_SECS", DEFAULT_SESSION_SWEEP_SECS),
        }
    }
}

fn secs_from_env(key: &str, default: u64) -> Duration {
    let secs = std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&s| s > 0)
        .unwrap_or(default);
    Duration::from_secs(secs)
}
