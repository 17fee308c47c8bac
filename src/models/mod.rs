pub mod binding;
pub mod envelope;
pub mod provider;
pub mod sso_config;

pub use binding::{UnbindRequest, UserBinding};
pub use envelope::ApiEnvelope;
pub use provider::{ProviderProtocol, SsoProvider};
pub use sso_config::{ConfigStatus, SsoConfig, SsoConfigPatch};
