use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A logged-in user and the bearer token the api issued for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Session {
    pub token: String,
    pub user: Value,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        token_expired(&self.token, now)
    }

    /// Best name to greet the user with.
    pub fn display_name(&self) -> String {
        ["username", "name", "email"]
            .iter()
            .find_map(|key| self.user.get(*key).and_then(Value::as_str))
            .unwrap_or("unknown user")
            .to_string()
    }
}

/// A token is expired when its `exp` claim lies before `now`. Tokens that cannot be
/// decoded count as expired; tokens without a numeric `exp` never expire.
pub(crate) fn token_expired(token: &str, now: DateTime<Utc>) -> bool {
    match claims(token) {
        Some(claims) => claims
            .get("exp")
            .and_then(Value::as_f64)
            .is_some_and(|exp| exp < now.timestamp() as f64),
        None => true,
    }
}

fn claims(token: &str) -> Option<Value> {
    let payload = token.split('.').nth(1)?.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Unsigned token carrying the given `exp`, for tests.
#[cfg(test)]
pub(crate) fn test_token(exp: Option<i64>) -> String {
    let claims = match exp {
        Some(exp) => serde_json::json!({"sub": "1", "exp": exp}),
        None => serde_json::json!({"sub": "1"}),
    };
    format!(
        "{}.{}.sig",
        URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#),
        URL_SAFE_NO_PAD.encode(claims.to_string())
    )
}
