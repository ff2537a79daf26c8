mod sms;

pub use sms::{ISmsGateway, InMemorySmsGateway, SentSms, TwilioSmsGateway};
