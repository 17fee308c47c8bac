use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the panel API lives and how to authenticate against it.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    /// Session token sent in the `token` header.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Reads `SSO_BASE_URL`, `SSO_TOKEN` and `SSO_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        debug!("Loaded client configuration from environment");
        Ok(config)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("SSO_BASE_URL").ok_or_else(|| {
            Error::Config("SSO_BASE_URL environment variable is not set".into())
        })?;
        let token = lookup("SSO_TOKEN").filter(|t| !t.is_empty());
        let timeout_secs = match lookup("SSO_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| {
                Error::Config(format!("SSO_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            base_url,
            token,
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| {
            error!("Failed to open config file {}: {}", path.display(), e);
            Error::Config(format!("cannot open {}: {}", path.display(), e))
        })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;

        let config: ClientConfig = serde_yaml::from_str(&contents)
            .map_err(|e| Error::Config(format!("invalid config {}: {}", path.display(), e)))?;
        config.validate()?;

        info!("Loaded client configuration from {}", path.display());
        Ok(config)
    }

    /// The base URL must be absolute and the timeout non-zero.
    pub fn validate(&self) -> Result<()> {
        self.base_url()?;
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be greater than 0".into()));
        }
        Ok(())
    }

    /// Parsed base URL; must be absolute.
    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
