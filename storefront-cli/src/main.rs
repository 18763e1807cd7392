//! Storefront CLI
//!
//! Operator tools for a running storefront.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;

use storefront_payments::base_url_for;
use storefront_types::{
    HealthResponse, PaymentsConfig, PaymentsCredentials, RuntimeMode, SessionProvider,
};
use storefront_web::RemoteSessionProvider;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about = "Storefront operator CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which payments preset the current environment selects
    PaymentsEnv {
        /// Runtime mode to resolve for (defaults to APP_ENV / NODE_ENV)
        #[arg(long)]
        mode: Option<String>,
    },
    /// Ask the auth provider whether a cookie carries a session
    Session {
        /// Base URL of the auth provider
        #[arg(long, env = "AUTH_URL")]
        auth_url: String,
        /// Raw Cookie header to forward
        #[arg(long)]
        cookie: Option<String>,
    },
    /// Check storefront health
    Health {
        /// Base URL of the storefront
        #[arg(long, env = "STOREFRONT_URL", default_value = "http://localhost:3000")]
        url: String,
    },
}

fn payments_env_report(mode: &RuntimeMode, credentials: &PaymentsCredentials) -> serde_json::Value {
    let config = PaymentsConfig::resolve(mode, credentials);
    json!({
        "runtime_mode": mode.to_string(),
        "environment": config.environment(),
        "base_url": base_url_for(config.environment()),
        "access_token": config.redacted_token(),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::PaymentsEnv { mode } => {
            let mode = match mode {
                Some(raw) => RuntimeMode::from_value(Some(&raw)),
                None => RuntimeMode::from_env(),
            };
            let report = payments_env_report(&mode, &PaymentsCredentials::from_env());
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Session { auth_url, cookie } => {
            let provider = RemoteSessionProvider::new(&auth_url);
            match provider.current_session(cookie.as_deref()).await? {
                Some(session) => {
                    println!("✓ Session present");
                    println!("{}", serde_json::to_string_pretty(session.payload())?);
                }
                None => println!("✗ No session"),
            }
        }

        Commands::Health { url } => {
            let resp = reqwest::get(format!("{}/health", url.trim_end_matches('/'))).await?;
            if !resp.status().is_success() {
                println!("✗ Storefront is not healthy ({})", resp.status());
                std::process::exit(1);
            }
            let health: HealthResponse = resp.json().await?;
            println!(
                "✓ Storefront is {} (payments: {})",
                health.status, health.payments_environment
            );
        }
    }

    Ok(())
}
