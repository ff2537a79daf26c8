use super::{normalize_phone_number, ISmsGateway};
use crate::Config;

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

const TWILIO_API_BASE_URL: &str = "https://api.twilio.com/2010-04-01";

/// Upper bound on a single provider call so that a hanging send cannot
/// stall a firing worker past one occurrence
const SEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct TwilioMessageResponse {
    sid: String,
    status: String,
}

struct TwilioRestApi {
    client: Client,
    account_sid: String,
    auth_token: String,
}

impl TwilioRestApi {
    fn new(account_sid: String, auth_token: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(SEND_TIMEOUT_SECS))
            .build()
            .expect("To create reqwest client");

        Self {
            client,
            account_sid,
            auth_token,
        }
    }

    async fn create_message(
        &self,
        from: &str,
        to: &str,
        body: &str,
    ) -> anyhow::Result<TwilioMessageResponse> {
        let params = [("From", from), ("To", to), ("Body", body)];
        match self
            .client
            .post(&format!(
                "{}/Accounts/{}/Messages.json",
                TWILIO_API_BASE_URL, self.account_sid
            ))
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
        {
            Ok(res) if res.status().is_success() => {
                res.json::<TwilioMessageResponse>().await.map_err(|e| {
                    error!(
                        "[Unexpected Response] Twilio API POST error. Error message: {:?}",
                        e
                    );
                    anyhow::Error::new(e)
                })
            }
            Ok(res) => {
                let status = res.status();
                let response_body = res.text().await.unwrap_or_default();
                error!(
                    "[Provider Error] Twilio API POST error. Status: {}. Response: {}",
                    status, response_body
                );
                Err(anyhow::anyhow!("Twilio responded with status: {}", status))
            }
            Err(e) => {
                error!(
                    "[Network Error] Twilio API POST error. Error message: {:?}",
                    e
                );
                Err(anyhow::Error::new(e))
            }
        }
    }
}

/// Delivers reminder notifications through the Twilio Messages API.
pub struct TwilioSmsGateway {
    api: TwilioRestApi,
    from_number: String,
    default_country_code: String,
}

impl TwilioSmsGateway {
    /// Builds the gateway from the `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN`
    /// and `TWILIO_PHONE_NUMBER` environment variables. Returns `None` when
    /// any of them is absent.
    pub fn from_env(config: &Config) -> Option<Self> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID").ok()?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN").ok()?;
        let from_number = std::env::var("TWILIO_PHONE_NUMBER").ok()?;

        Some(Self {
            api: TwilioRestApi::new(account_sid, auth_token),
            from_number,
            default_country_code: config.default_country_code.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ISmsGateway for TwilioSmsGateway {
    async fn send(&self, phone_number: &str, message: &str) -> bool {
        let to = normalize_phone_number(phone_number, &self.default_country_code);
        match self
            .api
            .create_message(&self.from_number, &to, message)
            .await
        {
            Ok(res) => {
                debug!(
                    "Twilio accepted message: {} with status: {}",
                    res.sid, res.status
                );
                true
            }
            Err(_) => false,
        }
    }
}
