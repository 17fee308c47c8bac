use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use serde::Serialize;
use std::path::PathBuf;

use sso_admin_client::{
    ClientConfig, ConfigStatus, ReqwestTransport, SsoClient, SsoConfigPatch, login_url,
};

/// Manage SSO providers, bindings and provider configuration
#[derive(Parser)]
#[command(name = "sso-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML config file; falls back to SSO_BASE_URL / SSO_TOKEN / SSO_TIMEOUT_SECS
    #[arg(long, global = true, env = "SSO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List providers available for login and binding
    Providers,
    /// List external accounts bound to the current user
    Bindings,
    /// Remove the current user's binding for a provider
    Unbind { provider: String },
    /// List provider configurations (admin)
    Configs,
    /// Create or update a provider configuration (admin)
    Save(SaveArgs),
    /// Print the browser login URL for a provider
    LoginUrl {
        provider: String,
        /// Bind the external account to the current user instead of signing in
        #[arg(long)]
        bind: bool,
    },
}

#[derive(Args)]
struct SaveArgs {
    #[arg(long)]
    provider: String,
    /// 1 to enable, 0 to disable
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=1))]
    enabled: Option<u8>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    client_id: Option<String>,
    #[arg(long)]
    client_secret: Option<String>,
    #[arg(long)]
    issuer_url: Option<String>,
    #[arg(long)]
    saml_metadata: Option<String>,
    #[arg(long)]
    ext: Option<String>,
}

impl SaveArgs {
    fn into_patch(self) -> SsoConfigPatch {
        SsoConfigPatch {
            provider: Some(self.provider),
            enabled: self.enabled.map(|flag| ConfigStatus::from(flag == 1)),
            name: self.name,
            client_id: self.client_id,
            client_secret: self.client_secret,
            issuer_url: self.issuer_url,
            saml_metadata: self.saml_metadata,
            ext: self.ext,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    // Default to INFO, overridable via RUST_LOG
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ClientConfig::load_from_file(path)?,
        None => ClientConfig::from_env()?,
    };
    debug!("Using {:?}", config);

    let client = SsoClient::new(ReqwestTransport::new(&config)?);
    match cli.command {
        Commands::Providers => print_json(&client.list_providers().await?)?,
        Commands::Bindings => print_json(&client.list_user_bindings().await?)?,
        Commands::Unbind { provider } => {
            client.unbind(&provider).await?;
            info!("Unbound {}", provider);
        }
        Commands::Configs => print_json(&client.list_sso_configs().await?)?,
        Commands::Save(args) => {
            let patch = args.into_patch();
            client.save_sso_config(&patch).await?;
            info!("Saved configuration for {}", patch.provider.unwrap_or_default());
        }
        Commands::LoginUrl { provider, bind } => {
            let token = if bind { config.token.as_deref() } else { None };
            if bind && token.is_none() {
                return Err(
                    "binding requires a session token (SSO_TOKEN or `token` in the config file)"
                        .into(),
                );
            }
            println!("{}", login_url(&config.base_url()?, &provider, token)?);
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
