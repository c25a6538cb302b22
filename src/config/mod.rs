use serde::{Deserialize, Serialize};

/// Runtime configuration for the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Overrides the platform storage directory
    pub storage_dir: Option<String>,
    /// `env_logger` / `android_logger` level filter
    pub log_filter: String,
    /// Seed sample bank accounts when the store has none
    pub seed_demo_data: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            log_filter: "info".to_string(),
            seed_demo_data: false,
        }
    }
}

impl ClientConfig {
    /// Load client configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            storage_dir: lookup("EXPENSE_CLIENT_STORAGE_DIR").filter(|dir| !dir.trim().is_empty()),
            log_filter: lookup("EXPENSE_CLIENT_LOG").unwrap_or_else(|| "info".to_string()),
            seed_demo_data: lookup("EXPENSE_CLIENT_SEED_DEMO")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_filter.parse().unwrap_or(log::LevelFilter::Info)
    }
}
