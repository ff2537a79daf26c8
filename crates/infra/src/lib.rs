mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
use repos::Repos;
pub use services::*;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct MediVaultContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub sms: Arc<dyn ISmsGateway>,
}

impl MediVaultContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            sms: Arc::new(InMemorySmsGateway::new()),
        }
    }

    async fn create_postgres(connection_string: &str) -> Self {
        let repos = Repos::create_postgres(connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            sms: Arc::new(InMemorySmsGateway::new()),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> MediVaultContext {
    const DATABASE_URL: &str = "DATABASE_URL";

    let mut context = match std::env::var(DATABASE_URL) {
        Ok(connection_string) => MediVaultContext::create_postgres(&connection_string).await,
        Err(_) => {
            info!(
                "{} env var was not provided. Going to use inmemory repos.",
                DATABASE_URL
            );
            MediVaultContext::create_inmemory()
        }
    };

    context.sms = match TwilioSmsGateway::from_env(&context.config) {
        Some(gateway) => Arc::new(gateway),
        None => {
            info!(
                "TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN and TWILIO_PHONE_NUMBER env vars were not all provided. Reminder notifications will only be logged."
            );
            Arc::new(InMemorySmsGateway::new())
        }
    };

    context
}
