use crate::core::{ChainId, NetworkType};
use crate::error::Result;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

pub const CONFIG_FILE_KEY: &str = "NIP7_QR_CONFIG";
pub const NETWORK_KEY: &str = "NIP7_QR_NETWORK";
pub const CHAIN_ID_KEY: &str = "NIP7_QR_CHAIN_ID";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub network_type: NetworkType,
    pub chain_id: ChainId,
    pub pretty: bool,
}

/// On-disk form, every key optional:
///
/// ```toml
/// network = "main_net"
/// chain_id = "E2A9F95E129283EF47B92A62FD748DBA4D32AA718AE6F8AC99C105CFA9F27A31"
/// pretty = true
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    network: Option<String>,
    chain_id: Option<String>,
    pretty: Option<bool>,
}

/// Layering: defaults, then the file named by `NIP7_QR_CONFIG`, then the
/// `NIP7_QR_NETWORK` / `NIP7_QR_CHAIN_ID` variables, then whatever the
/// caller sets.
pub struct Config {
    inner: RwLock<Settings>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let config = Config::with_settings(Settings::default());

        if let Ok(path) = env::var(CONFIG_FILE_KEY) {
            if let Err(e) = config.load_file(Path::new(&path)) {
                warn!("Ignoring config file {path}: {e}");
            }
        }

        for key in [NETWORK_KEY, CHAIN_ID_KEY] {
            match env::var(key) {
                Ok(value) => {
                    if let Err(e) = config.apply_override(key, &value) {
                        warn!("Ignoring {key}: {e}");
                    }
                }
                Err(env::VarError::NotUnicode(_)) => warn!("Ignoring {key}: not valid unicode"),
                Err(env::VarError::NotPresent) => {}
            }
        }

        config
    }

    pub fn with_settings(settings: Settings) -> Config {
        Config {
            inner: RwLock::new(settings),
        }
    }

    pub fn load_file(&self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)?;
        self.apply_toml(&text)?;
        info!("Loaded configuration from {}", path.display());
        Ok(())
    }

    /// Merge TOML text. Nothing is changed unless every key is valid.
    pub fn apply_toml(&self, text: &str) -> Result<()> {
        let file: FileSettings = toml::from_str(text)?;

        let network_type = file
            .network
            .as_deref()
            .map(str::parse::<NetworkType>)
            .transpose()?;
        let chain_id = file.chain_id.as_deref().map(ChainId::new).transpose()?;

        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        if let Some(network_type) = network_type {
            inner.network_type = network_type;
        }
        if let Some(chain_id) = chain_id {
            inner.chain_id = chain_id;
        }
        if let Some(pretty) = file.pretty {
            inner.pretty = pretty;
        }
        Ok(())
    }

    /// Apply one environment variable. Keys this tool does not own are ignored.
    pub fn apply_override(&self, key: &str, value: &str) -> Result<()> {
        match key {
            NETWORK_KEY => {
                self.set_network_type(value.parse()?);
                debug!("Network taken from {NETWORK_KEY}");
            }
            CHAIN_ID_KEY => {
                self.set_chain_id(ChainId::new(value)?);
                debug!("Chain id taken from {CHAIN_ID_KEY}");
            }
            _ => {}
        }
        Ok(())
    }

    pub fn get_network_type(&self) -> NetworkType {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner.network_type
    }

    pub fn set_network_type(&self, network_type: NetworkType) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.network_type = network_type;
    }

    pub fn get_chain_id(&self) -> ChainId {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner.chain_id.clone()
    }

    pub fn set_chain_id(&self, chain_id: ChainId) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.chain_id = chain_id;
    }

    pub fn is_pretty(&self) -> bool {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner.pretty
    }

    pub fn set_pretty(&self, pretty: bool) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.pretty = pretty;
    }

    pub fn snapshot(&self) -> Settings {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner.clone()
    }
}
