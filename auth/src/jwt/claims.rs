use std::collections::HashMap;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token lifetime. Tokens expire this many minutes after issuance.
pub const ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 30;

/// Claim set carried by an access token.
///
/// Standard fields are optional so that decoding never rejects a token for
/// missing claims; semantic checks (subject presence, expiry) belong to the
/// caller. Custom fields round-trip through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    /// Subject (username of the authenticated account)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Additional custom fields (flattened into token)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl AccessClaims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for an authenticated subject.
    ///
    /// Expiry is always `now` plus the fixed [`ACCESS_TOKEN_EXPIRE_MINUTES`]
    /// window; the caller supplies `now` so one clock snapshot covers the
    /// whole token operation.
    ///
    /// # Arguments
    /// * `subject` - Username the token is issued for
    /// * `now` - Issuance instant
    ///
    /// # Returns
    /// Claims with sub, iat, and exp set
    pub fn for_subject(subject: impl ToString, now: DateTime<Utc>) -> Self {
        let expiration = now + Duration::minutes(ACCESS_TOKEN_EXPIRE_MINUTES);

        Self {
            sub: Some(subject.to_string()),
            exp: Some(expiration.timestamp()),
            iat: Some(now.timestamp()),
            extra: HashMap::new(),
        }
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }

    /// Get the subject, treating an empty string as absent.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|s| !s.is_empty())
    }

    /// Check if the token is expired at the given instant.
    ///
    /// A token expiring exactly at `current_timestamp` is still valid.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| exp < current_timestamp)
    }
}

impl Default for AccessClaims {
    fn default() -> Self {
        Self {
            sub: None,
            exp: None,
            iat: None,
            extra: HashMap::new(),
        }
    }
}
