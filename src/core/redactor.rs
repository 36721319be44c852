//! Secret redaction
//!
//! Scrubs registered secrets and connection-pool argument lists from a record
//! before it is rendered by any sink.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Token substituted for every redacted value
pub const REDACTED: &str = "(redacted)";

// Connection pool reprs carry host, port and sometimes credentials.
static CONNECTION_POOL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(HTTPS?ConnectionPool)\(.*?\)").expect("connection pool pattern is valid")
});

/// Insertion-ordered set of secrets plus the built-in connection pool pattern
#[derive(Debug, Clone, Default)]
pub struct Redactor {
    secrets: Vec<String>,
}

impl Redactor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a secret. Duplicates and empty strings are ignored.
    ///
    /// Returns `true` if the secret was newly added.
    pub fn add_secret(&mut self, secret: impl Into<String>) -> bool {
        let secret = secret.into();
        if secret.is_empty() || self.secrets.contains(&secret) {
            return false;
        }
        self.secrets.push(secret);
        true
    }

    pub fn secrets(&self) -> &[String] {
        &self.secrets
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Apply both passes to a single-line message.
    ///
    /// ```
    /// use boxed_logger::Redactor;
    ///
    /// let mut redactor = Redactor::new();
    /// redactor.add_secret("sk-12345");
    /// assert_eq!(redactor.redact("token=sk-12345 ok"), "token=(redacted) ok");
    /// ```
    pub fn redact<'a>(&self, message: &'a str) -> Cow<'a, str> {
        let mut redacted = Cow::Borrowed(message);

        for secret in &self.secrets {
            if redacted.contains(secret.as_str()) {
                redacted = Cow::Owned(redacted.replace(secret.as_str(), REDACTED));
            }
        }

        if redacted.contains("ConnectionPool(") {
            let replaced = CONNECTION_POOL_RE
                .replace_all(&redacted, format!("${{1}}{}", REDACTED))
                .into_owned();
            redacted = Cow::Owned(replaced);
        }

        redacted
    }
}
