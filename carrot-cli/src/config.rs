//! CLI configuration
//!
//! Two sources feed a command's configuration: the persistent key-value
//! config file (server address and user email) and the per-invocation
//! verbosity flags. The resulting [`Config`] is built once in `main` and
//! passed by reference into every handler, so nothing reads ambient state.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use carrot_client::{CarrotClient, Verbosity};
use serde::{Deserialize, Serialize};

/// Config variable naming the CARROT server address (host:port, no scheme)
pub const SERVER_ADDRESS_VAR: &str = "carrot_server_address";
/// Config variable naming the user's email, the default creator identity
pub const EMAIL_VAR: &str = "email";

/// The variables the config file knows about
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigVars {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    carrot_server_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

/// The on-disk key-value configuration store
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    vars: ConfigVars,
}

impl ConfigStore {
    /// `$CARROT_CLI_CONFIG` when set, otherwise `~/.carrot_cli/config.json`
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("CARROT_CLI_CONFIG") {
            return PathBuf::from(path);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Path::new(&home).join(".carrot_cli").join("config.json")
    }

    /// Load the store from the default path. A missing file is an empty
    /// store; a malformed one is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    pub fn load_from(path: PathBuf) -> Result<Self> {
        let vars = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("Malformed config file at {}", path.display()))?,
            Err(err) if err.kind() == ErrorKind::NotFound => ConfigVars::default(),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read config file at {}", path.display()));
            }
        };
        Ok(Self { path, vars })
    }

    /// Look up a variable, failing when it is not set
    pub fn load_var(&self, key: &str) -> Result<String> {
        self.load_var_no_error(key)
            .with_context(|| format!("No {key} config variable set"))
    }

    /// Look up a variable, returning None when it is not set
    pub fn load_var_no_error(&self, key: &str) -> Option<String> {
        match key {
            SERVER_ADDRESS_VAR => self.vars.carrot_server_address.clone(),
            EMAIL_VAR => self.vars.email.clone(),
            _ => None,
        }
    }

    /// Set a variable and persist the store
    pub fn set_var(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            SERVER_ADDRESS_VAR => self.vars.carrot_server_address = Some(value.to_string()),
            EMAIL_VAR => self.vars.email = Some(value.to_string()),
            _ => bail!(
                "Unknown config variable {key}.  Known variables are {SERVER_ADDRESS_VAR} and {EMAIL_VAR}"
            ),
        }
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
        }
        let text = serde_json::to_string_pretty(&self.vars)?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("Failed to write config file at {}", self.path.display()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Configuration for one command invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Resolved server address: the --server_address flag when given,
    /// otherwise the config variable
    pub server_address: Option<String>,
    pub verbosity: Verbosity,
    pub store: ConfigStore,
}

impl Config {
    /// Build a client for the resolved server address. Commands cannot do
    /// anything useful without one, so a missing address exits immediately.
    pub fn client(&self) -> CarrotClient {
        match &self.server_address {
            Some(address) => CarrotClient::new(address.clone(), self.verbosity),
            None => {
                println!(
                    "No {SERVER_ADDRESS_VAR} config variable set.  Set one with \
                     \"carrot config set {SERVER_ADDRESS_VAR} <host:port>\"."
                );
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
        ConfigStore::load_from(dir.path().join("config.json")).unwrap()
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load_var_no_error(SERVER_ADDRESS_VAR), None);
        assert!(store.load_var(EMAIL_VAR).is_err());
    }

    #[test]
    fn test_set_var_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set_var(SERVER_ADDRESS_VAR, "example.com:8080").unwrap();
        store.set_var(EMAIL_VAR, "adora@example.com").unwrap();

        let reloaded = store_in(&dir);
        assert_eq!(
            reloaded.load_var(SERVER_ADDRESS_VAR).unwrap(),
            "example.com:8080"
        );
        assert_eq!(
            reloaded.load_var_no_error(EMAIL_VAR),
            Some("adora@example.com".to_string())
        );
    }

    #[test]
    fn test_unknown_var_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        assert!(store.set_var("favorite_color", "purple").is_err());
        assert_eq!(store.load_var_no_error("favorite_color"), None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(ConfigStore::load_from(path).is_err());
    }
}
