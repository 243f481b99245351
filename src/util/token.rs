//! Bearer token claim decoding.
//!
//! The client never verifies signatures; it only reads the payload segment to
//! learn who is signed in and when the token stops being accepted.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Account role carried in the `role` claim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Staff,
    Admin,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Path segment the server mounts this role's routes under.
    #[must_use]
    pub fn route_prefix(self) -> Option<&'static str> {
        match self {
            Self::Student => Some("student"),
            Self::Staff => Some("staff"),
            Self::Admin => Some("admin"),
            Self::Unknown => None,
        }
    }
}

/// Decoded claims of a session credential.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub role: Role,
    /// Opaque user payload.
    #[serde(default)]
    pub data: serde_json::Value,
    /// Expiry as Unix seconds. Fractional NumericDates are floored.
    #[serde(deserialize_with = "numeric_date")]
    pub exp: i64,
}

fn numeric_date<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    if !secs.is_finite() {
        return Err(serde::de::Error::custom("exp is not a finite number"));
    }
    #[allow(clippy::cast_possible_truncation)]
    let floored = secs.floor() as i64;
    Ok(floored)
}

impl Claims {
    /// Whether the credential is still accepted at `now_ms` (Unix millis).
    #[must_use]
    pub fn is_live_at(&self, now_ms: u64) -> bool {
        self.expires_at_ms().is_some_and(|exp_ms| exp_ms > now_ms)
    }

    /// Expiry in Unix milliseconds, `None` for pre-epoch values.
    #[must_use]
    pub fn expires_at_ms(&self) -> Option<u64> {
        u64::try_from(self.exp).ok().map(|secs| secs.saturating_mul(1000))
    }
}

/// Decode the claims of `token` together with the raw claim object.
///
/// # Errors
///
/// Returns [`TokenError`] when the token has no payload segment, the segment is
/// not base64url, or the payload is not a JSON claims object.
pub fn decode_claims(token: &str) -> Result<(Claims, serde_json::Value), TokenError> {
    let payload = token
        .trim()
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::MissingPayload)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let raw: serde_json::Value = serde_json::from_slice(&bytes)?;
    let claims = Claims::deserialize(&raw)?;
    Ok((claims, raw))
}

/// Unsigned token builder for tests across the crate.
#[cfg(test)]
pub(crate) fn unsigned_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}
