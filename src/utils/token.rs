use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::error::{Error, Result};
use crate::middleware::auth::{Claims, Role};

/// Signs an HS256 staff token valid for `ttl_secs` seconds.
pub fn issue_staff_token(
    secret: &str,
    email: &str,
    name: Option<&str>,
    role: Role,
    ttl_secs: i64,
) -> Result<String> {
    let exp = (Utc::now().timestamp() + ttl_secs).max(0) as usize;
    let claims = Claims {
        sub: email.to_string(),
        exp,
        role: Some(role.as_str().to_string()),
        name: name.map(str::to_string),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Failed to sign token: {}", e)))
}
