use std::env;
use std::path::{Path, PathBuf};

use super::wallet::WalletRole;

/// Environment variable holding the node offset override
pub const OFFSET_ENV_VAR: &str = "NODE_OFFSET";

/// Environment variable for the working directory (wallets + node config)
pub const DIR_ENV_VAR: &str = "NODE_SETUP_DIR";

/// Environment variable for the node config file name
pub const CONFIG_ENV_VAR: &str = "NODE_SETUP_CONFIG";

/// Node config file name used when nothing else is configured
pub const DEFAULT_NODE_CONFIG: &str = "node-config.toml";

/// Process-level inputs for every setup command.
///
/// Built once at the process boundary; library operations receive the pieces
/// they need as plain parameters and never read the environment themselves.
#[derive(Debug, Clone)]
pub struct SetupConfig {
    /// Directory holding the wallet files and the node config
    pub work_dir: PathBuf,

    /// Node config file, relative to `work_dir` unless absolute
    pub node_config: PathBuf,

    /// Raw `NODE_OFFSET` value. Empty strings are normalized to `None`.
    pub offset_override: Option<String>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            node_config: PathBuf::from(DEFAULT_NODE_CONFIG),
            offset_override: None,
        }
    }
}

impl SetupConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // NODE_OFFSET
        config.offset_override = lookup(OFFSET_ENV_VAR).filter(|v| !v.is_empty());

        // NODE_SETUP_DIR
        if let Some(val) = lookup(DIR_ENV_VAR) {
            let val = val.trim();
            if !val.is_empty() {
                config.work_dir = PathBuf::from(val);
            }
        }

        // NODE_SETUP_CONFIG
        if let Some(val) = lookup(CONFIG_ENV_VAR) {
            let val = val.trim();
            if !val.is_empty() {
                config.node_config = PathBuf::from(val);
            }
        }

        config
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, work_dir: Option<PathBuf>, node_config: Option<PathBuf>) -> Self {
        if let Some(dir) = work_dir {
            self.work_dir = dir;
        }
        if let Some(cfg) = node_config {
            self.node_config = cfg;
        }
        self
    }

    pub fn node_config_path(&self) -> PathBuf {
        resolve_in(&self.work_dir, &self.node_config)
    }

    pub fn wallet_path(&self, role: WalletRole) -> PathBuf {
        self.work_dir.join(role.file_name())
    }

    pub fn offset_override(&self) -> Option<&str> {
        self.offset_override.as_deref()
    }
}

fn resolve_in(dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = SetupConfig::from_lookup(|_| None);
        assert_eq!(config.work_dir, PathBuf::from("."));
        assert_eq!(config.node_config_path(), PathBuf::from("./node-config.toml"));
        assert!(config.offset_override().is_none());
    }

    #[test]
    fn test_env_values_are_picked_up() {
        let config = SetupConfig::from_lookup(lookup_from(&[
            ("NODE_OFFSET", "12345"),
            ("NODE_SETUP_DIR", "/srv/node"),
            ("NODE_SETUP_CONFIG", "custom.toml"),
        ]));
        assert_eq!(config.offset_override(), Some("12345"));
        assert_eq!(config.node_config_path(), PathBuf::from("/srv/node/custom.toml"));
        assert_eq!(
            config.wallet_path(WalletRole::Callback),
            PathBuf::from("/srv/node/callback-kp.json")
        );
    }

    #[test]
    fn test_empty_offset_counts_as_unset() {
        let config = SetupConfig::from_lookup(lookup_from(&[("NODE_OFFSET", "")]));
        assert!(config.offset_override().is_none());
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = SetupConfig::from_lookup(lookup_from(&[("NODE_SETUP_DIR", "/env")]))
            .with_overrides(Some(PathBuf::from("/cli")), Some(PathBuf::from("/abs/node.toml")));
        assert_eq!(config.work_dir, PathBuf::from("/cli"));
        // absolute config paths ignore work_dir
        assert_eq!(config.node_config_path(), PathBuf::from("/abs/node.toml"));
    }
}
