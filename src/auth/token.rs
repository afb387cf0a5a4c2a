use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Session claims: the user id and an absolute expiry. The demo this
/// replaces trusted an unsigned base64 payload; here the token is an
/// HS256-signed JWT so a tampered or hand-rolled payload never
/// restores a session.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: &str, ttl_hours: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            exp: (Utc::now() + Duration::hours(ttl_hours)).timestamp(),
        }
    }
}

pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Token encode failed: {e}"))
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, String> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| format!("Token decode failed: {e}"))?;

    // The library's expiry check is strict (`exp < now`), which lets
    // the exact-boundary second through. A session is only valid while
    // its expiry is still in the future.
    if claims.exp <= Utc::now().timestamp() {
        return Err("Token expired".to_string());
    }

    Ok(claims)
}
