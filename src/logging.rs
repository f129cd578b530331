use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Tracing setup for the solver binary and library consumers who want the
/// same console format the CLI uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingConfig {
    pub log_level: String,
    pub json: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

impl TracingConfig {
    /// Install a global subscriber. Safe to call once per process; a second
    /// call is a no-op (the underlying `set_global_default` error is
    /// swallowed, matching typical CLI entry-point behavior).
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let registry = Registry::default().with(env_filter);
        if self.json {
            let _ = registry.with(fmt::layer().json().flatten_event(true)).try_init();
        } else {
            let _ = registry.with(fmt::layer().compact()).try_init();
        }
        Ok(())
    }
}
