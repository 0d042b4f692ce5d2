use crate::error::{QuoteError, Result};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BUSINESS_NAME: &str = "Ali Fitness Services";
pub const DEFAULT_CONTACT_NUMBER: &str = "919876543210";
pub const DEFAULT_CURRENCY: &str = "₹";

/// A contact number in international format: country code plus subscriber
/// number, digits only. Messaging links need it bare (`91xxxxxxxxxx`),
/// dialing adds the `+` prefix at render time. A leading `+` on input is
/// accepted and stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNumber(String);

impl ContactNumber {
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContactNumber {
    type Err = QuoteError;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(QuoteError::ValidationError(format!(
                "contact number must be digits in international format, got {input:?}"
            )));
        }
        Ok(Self(digits.to_string()))
    }
}

impl fmt::Display for ContactNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-invocation store settings: who the quote is addressed to, where it is
/// sent, and which currency marker prices carry.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub business_name: String,
    pub contact: ContactNumber,
    pub currency: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
            contact: ContactNumber(DEFAULT_CONTACT_NUMBER.to_string()),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}
