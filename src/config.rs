use serde::Deserialize;
use tracing::warn;

fn default_enabled() -> bool {
    true
}

fn default_port() -> u16 {
    8090
}

/// Control server settings for the standalone binary.
///
/// Library users pass a port to `ControlServer::start` directly; this only
/// feeds `main`.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Whether the binary starts the control server at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// TCP port bound on all interfaces
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Loads configuration.
    ///
    /// An optional YAML file named by `SSR_CONTROL_CONFIG` is read first,
    /// then the `SSR_CONTROL_ENABLED` and `SSR_CONTROL_PORT` environment
    /// variables override it. A value of `"0"` disables the server.
    pub fn load() -> Self {
        let mut cfg = match std::env::var("SSR_CONTROL_CONFIG") {
            Ok(path) => Self::from_file(&path).unwrap_or_else(|e| {
                warn!(%path, error = %e, "could not load config file, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        };

        if let Ok(value) = std::env::var("SSR_CONTROL_ENABLED") {
            cfg.enabled = value != "0";
        }
        if let Ok(value) = std::env::var("SSR_CONTROL_PORT") {
            match value.parse() {
                Ok(port) => cfg.port = port,
                Err(_) => warn!(%value, "ignoring invalid SSR_CONTROL_PORT"),
            }
        }

        cfg
    }

    fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}
