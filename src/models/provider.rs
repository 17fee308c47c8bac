use serde::{Deserialize, Serialize};
use std::fmt;

/// A provider offered on the login page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoProvider {
    pub provider: String,
    #[serde(default)]
    pub name: String,
}

impl SsoProvider {
    pub fn protocol(&self) -> ProviderProtocol {
        ProviderProtocol::from_provider_key(&self.provider)
    }
}

/// Login flow the server runs for a provider key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderProtocol {
    OAuth2,
    Oidc,
    Saml,
}

impl ProviderProtocol {
    /// `github` is plain OAuth2, `google` is OIDC, `saml` is SAML. Every
    /// other key is treated as a generic OIDC issuer.
    pub fn from_provider_key(key: &str) -> Self {
        match key {
            "github" => Self::OAuth2,
            "saml" => Self::Saml,
            _ => Self::Oidc,
        }
    }
}

impl fmt::Display for ProviderProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OAuth2 => write!(f, "OAuth2"),
            Self::Oidc => write!(f, "OIDC"),
            Self::Saml => write!(f, "SAML"),
        }
    }
}
