use serde::{Deserialize, Serialize};
use std::fmt;

use super::provider::ProviderProtocol;

/// Integer flag stored in the `enabled` column: 0 = disabled, 1 = enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ConfigStatus {
    #[default]
    Disabled,
    Enabled,
}

impl ConfigStatus {
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

impl From<bool> for ConfigStatus {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

impl From<ConfigStatus> for u8 {
    fn from(status: ConfigStatus) -> Self {
        match status {
            ConfigStatus::Disabled => 0,
            ConfigStatus::Enabled => 1,
        }
    }
}

impl TryFrom<u8> for ConfigStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::Enabled),
            other => Err(format!("enabled must be 0 or 1, got {}", other)),
        }
    }
}

/// Administrative configuration of one provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsoConfig {
    pub provider: String,
    #[serde(default)]
    pub enabled: ConfigStatus,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    /// OIDC issuer, unused by OAuth2 and SAML providers.
    #[serde(default)]
    pub issuer_url: String,
    /// SAML metadata URL or inline XML.
    #[serde(default)]
    pub saml_metadata: String,
    /// Provider-specific extension data, usually JSON.
    #[serde(default)]
    pub ext: String,
}

impl SsoConfig {
    pub fn protocol(&self) -> ProviderProtocol {
        ProviderProtocol::from_provider_key(&self.provider)
    }
}

impl fmt::Debug for SsoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SsoConfig")
            .field("provider", &self.provider)
            .field("enabled", &self.enabled)
            .field("name", &self.name)
            .field("client_id", &self.client_id)
            .field("client_secret", &redacted(!self.client_secret.is_empty()))
            .field("issuer_url", &self.issuer_url)
            .field("saml_metadata", &self.saml_metadata)
            .field("ext", &self.ext)
            .finish()
    }
}

/// Partial update for `POST /system/ssoConfig/save`.
///
/// The server creates the record when `provider` is new and otherwise updates
/// it. Fields left as `None` are not serialized at all.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsoConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<ConfigStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saml_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
}

impl SsoConfigPatch {
    pub fn for_provider(provider: impl Into<String>) -> Self {
        Self {
            provider: Some(provider.into()),
            ..Default::default()
        }
    }

    pub fn enabled(mut self, status: ConfigStatus) -> Self {
        self.enabled = Some(status);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn issuer_url(mut self, issuer_url: impl Into<String>) -> Self {
        self.issuer_url = Some(issuer_url.into());
        self
    }

    pub fn saml_metadata(mut self, saml_metadata: impl Into<String>) -> Self {
        self.saml_metadata = Some(saml_metadata.into());
        self
    }

    pub fn ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = Some(ext.into());
        self
    }
}

impl From<SsoConfig> for SsoConfigPatch {
    fn from(config: SsoConfig) -> Self {
        Self {
            provider: Some(config.provider),
            enabled: Some(config.enabled),
            name: Some(config.name),
            client_id: Some(config.client_id),
            client_secret: Some(config.client_secret),
            issuer_url: Some(config.issuer_url),
            saml_metadata: Some(config.saml_metadata),
            ext: Some(config.ext),
        }
    }
}

impl fmt::Debug for SsoConfigPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SsoConfigPatch")
            .field("provider", &self.provider)
            .field("enabled", &self.enabled)
            .field("name", &self.name)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| redacted(true)))
            .field("issuer_url", &self.issuer_url)
            .field("saml_metadata", &self.saml_metadata)
            .field("ext", &self.ext)
            .finish()
    }
}

fn redacted(present: bool) -> &'static str {
    if present { "<redacted>" } else { "" }
}
