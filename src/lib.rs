//! Typed client for the SSO administration endpoints of the panel API.
//!
//! ```rust,no_run
//! use sso_admin_client::{ClientConfig, ReqwestTransport, SsoClient, SsoConfigPatch, ConfigStatus};
//!
//! # async fn example() -> sso_admin_client::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let client = SsoClient::new(ReqwestTransport::new(&config)?);
//!
//! for provider in client.list_providers().await? {
//!     println!("{} ({})", provider.name, provider.provider);
//! }
//!
//! let patch = SsoConfigPatch::for_provider("github").enabled(ConfigStatus::Enabled);
//! client.save_sso_config(&patch).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod redirect;
pub mod transport;

pub use client::{SsoClient, login_url};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::*;
pub use redirect::SsoRedirect;
pub use transport::{ApiRequest, HttpTransport, Method, ReqwestTransport};
