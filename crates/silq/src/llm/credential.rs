//! Caller-supplied provider credential.

use std::fmt;

use serde::Deserialize;
use url::form_urlencoded;

const REDACTED: &str = "[REDACTED]";

/// An API key passed by the caller for a single request.
///
/// Has no `Display` impl and a redacted `Debug` impl, so it cannot end up in
/// a log line or error message by accident. Use [`Credential::expose`] at the
/// one place the raw value goes on the wire.
#[derive(Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Replace every occurrence of the secret in `text`, raw or in the
    /// query-string encoding it has when sent as a URL parameter.
    pub fn redact(&self, text: &str) -> String {
        let secret = self.0.trim();
        if secret.is_empty() {
            return text.to_string();
        }
        let encoded: String = form_urlencoded::byte_serialize(secret.as_bytes()).collect();
        text.replace(secret, REDACTED).replace(&encoded, REDACTED)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&REDACTED).finish()
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
