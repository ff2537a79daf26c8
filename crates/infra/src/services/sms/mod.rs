mod twilio_api;

pub use twilio_api::TwilioSmsGateway;

use std::sync::Mutex;
use tracing::info;

/// Gateway to the external messaging provider that delivers reminder
/// notifications.
///
/// Provider faults are converted into a `false` return value and logged,
/// they are never raised to the caller. No retry is performed here: a
/// missed send is dropped until the next scheduled occurrence.
#[async_trait::async_trait]
pub trait ISmsGateway: Send + Sync {
    /// Returns `true` if the message was accepted by the provider
    async fn send(&self, phone_number: &str, message: &str) -> bool;
}

/// Prepends `default_country_code` when `phone_number` does not already
/// start with an international prefix marker.
pub(crate) fn normalize_phone_number(phone_number: &str, default_country_code: &str) -> String {
    if phone_number.starts_with('+') {
        phone_number.to_string()
    } else {
        format!("{}{}", default_country_code, phone_number)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentSms {
    pub to: String,
    pub body: String,
}

/// Records messages instead of delivering them. Used in tests and when no
/// provider credentials are configured.
pub struct InMemorySmsGateway {
    sent: Mutex<Vec<SentSms>>,
    fail_sends: bool,
}

impl InMemorySmsGateway {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(vec![]),
            fail_sends: false,
        }
    }

    /// A gateway where every send fails, for exercising provider outages
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(vec![]),
            fail_sends: true,
        }
    }

    pub fn sent(&self) -> Vec<SentSms> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ISmsGateway for InMemorySmsGateway {
    async fn send(&self, phone_number: &str, message: &str) -> bool {
        if self.fail_sends {
            return false;
        }
        info!("Sms to {}: {}", phone_number, message);
        self.sent.lock().unwrap().push(SentSms {
            to: phone_number.to_string(),
            body: message.to_string(),
        });
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_prepends_the_default_country_code() {
        assert_eq!(
            normalize_phone_number("9876543210", "+91"),
            "+919876543210"
        );
    }

    #[test]
    fn it_keeps_international_numbers_unchanged() {
        assert_eq!(
            normalize_phone_number("+14155550123", "+91"),
            "+14155550123"
        );
    }

    #[tokio::test]
    async fn failing_gateway_reports_failure() {
        let gateway = InMemorySmsGateway::failing();
        assert!(!gateway.send("+14155550123", "hello").await);
        assert!(gateway.sent().is_empty());
    }
}
