//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Every field is optional in the environment and falls back to a fixed
/// default. A variable set to the empty string counts as unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP listening port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Deployment Labels ===
    /// Environment label reported by the welcome endpoint.
    #[serde(default = "default_node_env")]
    pub node_env: String,

    /// Pod name reported by the welcome endpoint.
    #[serde(default = "default_pod_name")]
    pub pod_name: String,

    // === Build Metadata ===
    /// Application version reported by the health and info endpoints.
    #[serde(default = "default_app_version")]
    pub app_version: String,

    /// Build timestamp injected by the pipeline.
    #[serde(default = "default_unknown")]
    pub build_time: String,

    /// Commit hash injected by the pipeline.
    #[serde(default = "default_unknown")]
    pub commit_hash: String,
}

fn default_port() -> u16 {
    3000
}

fn default_node_env() -> String {
    "development".to_string()
}

fn default_pod_name() -> String {
    "local".to_string()
}

fn default_app_version() -> String {
    "1.0.0".to_string()
}

fn default_unknown() -> String {
    "unknown".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            node_env: default_node_env(),
            pod_name: default_pod_name(),
            app_version: default_app_version(),
            build_time: default_unknown(),
            commit_hash: default_unknown(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        // Non-UTF-8 variables cannot be any of ours; skip them.
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?))),
        )
    }

    /// Build configuration from an explicit set of variables.
    ///
    /// Empty values are dropped before deserialization so they take the
    /// default, the same way an unset variable does.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars.into_iter().filter(|(_, value)| !value.is_empty()))
    }

    /// Environment label (`NODE_ENV`).
    pub fn environment(&self) -> &str {
        &self.node_env
    }
}
