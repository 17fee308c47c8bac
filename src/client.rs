//! Typed wrappers for the `/system/sso*` endpoints.

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::error::{Error, Result};
use crate::models::{SsoConfig, SsoConfigPatch, SsoProvider, UnbindRequest, UserBinding};
use crate::transport::{ApiRequest, HttpTransport};

pub const PROVIDERS_PATH: &str = "/system/sso/providers";
pub const USER_BINDINGS_PATH: &str = "/system/sso/getUserBindings";
pub const UNBIND_PATH: &str = "/system/sso/unbind";
pub const SSO_CONFIG_LIST_PATH: &str = "/system/ssoConfig/getList";
pub const SSO_CONFIG_SAVE_PATH: &str = "/system/ssoConfig/save";

/// Stateless client for SSO administration. Cloning shares the transport.
pub struct SsoClient<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> Clone for SsoClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: HttpTransport> SsoClient<T> {
    pub fn new(transport: T) -> Self {
        Self::from_arc(Arc::new(transport))
    }

    pub fn from_arc(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Providers offered for login and binding.
    pub async fn list_providers(&self) -> Result<Vec<SsoProvider>> {
        let data = self.transport.send(ApiRequest::get(PROVIDERS_PATH)).await?;
        decode_list(data)
    }

    /// External accounts bound to the signed-in user.
    pub async fn list_user_bindings(&self) -> Result<Vec<UserBinding>> {
        let data = self.transport.send(ApiRequest::post(USER_BINDINGS_PATH)).await?;
        decode_list(data)
    }

    /// Removes the signed-in user's binding for `provider`.
    pub async fn unbind(&self, provider: &str) -> Result<()> {
        debug!("Unbinding provider {}", provider);
        let request = ApiRequest::post(UNBIND_PATH).with_data(&UnbindRequest { provider })?;
        self.transport.send(request).await?;
        Ok(())
    }

    /// Every stored provider configuration. Admin only.
    pub async fn list_sso_configs(&self) -> Result<Vec<SsoConfig>> {
        let data = self.transport.send(ApiRequest::post(SSO_CONFIG_LIST_PATH)).await?;
        decode_list(data)
    }

    /// Creates or updates the configuration keyed by `patch.provider`.
    pub async fn save_sso_config(&self, patch: &SsoConfigPatch) -> Result<()> {
        debug!("Saving SSO config for {:?}", patch.provider);
        let request = ApiRequest::post(SSO_CONFIG_SAVE_PATH).with_data(patch)?;
        self.transport.send(request).await?;
        Ok(())
    }
}

// The server encodes an empty list as `null`.
fn decode_list<I: DeserializeOwned>(data: Value) -> Result<Vec<I>> {
    if data.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(data)?)
}

/// Browser entry point of the login flow for `provider`.
///
/// Passing the signed-in user's token turns the flow into a bind of the
/// external account to that user.
pub fn login_url(base_url: &Url, provider: &str, user_token: Option<&str>) -> Result<Url> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| Error::NotABaseUrl(base_url.to_string()))?
        .pop_if_empty()
        .extend(["system", "sso", "login", provider]);
    if let Some(token) = user_token {
        url.query_pairs_mut().append_pair("token", token);
    }
    Ok(url)
}
