use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Staff e-mail address.
    pub sub: String,
    pub exp: usize,
    pub role: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Recruiter,
}

impl Role {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("admin") {
            Some(Role::Admin)
        } else if raw.eq_ignore_ascii_case("recruiter") {
            Some(Role::Recruiter)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Recruiter => "recruiter",
        }
    }
}

/// Identity resolved once per request from the bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffSession {
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
}

impl StaffSession {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name from the token, else the local part of the e-mail.
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

fn reject(status: StatusCode, code: &str) -> Response {
    (status, Json(json!({ "error": code }))).into_response()
}

pub fn decode_session(secret: &str, token: &str) -> Option<StaffSession> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .ok()?;
    let role = Role::parse(data.claims.role.as_deref().unwrap_or_default())?;
    Some(StaffSession {
        email: data.claims.sub,
        name: data.claims.name,
        role,
    })
}

pub async fn require_staff(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return reject(StatusCode::UNAUTHORIZED, "missing_authorization");
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return reject(StatusCode::UNAUTHORIZED, "bad_authorization");
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return reject(StatusCode::UNAUTHORIZED, "unsupported_scheme");
    };

    match decode_session(&state.settings.jwt_secret, token) {
        Some(session) => {
            debug!(email = %session.email, role = session.role.as_str(), "staff session resolved");
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        None => reject(StatusCode::UNAUTHORIZED, "invalid_token"),
    }
}

/// Must run after [`require_staff`].
pub async fn require_admin(req: Request, next: Next) -> Response {
    match req.extensions().get::<StaffSession>() {
        Some(session) if session.is_admin() => next.run(req).await,
        Some(_) => reject(StatusCode::FORBIDDEN, "forbidden"),
        None => reject(StatusCode::UNAUTHORIZED, "missing_authorization"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::token::issue_staff_token;

    #[test]
    fn decodes_known_roles_only() {
        let token = issue_staff_token("secret", "ana@corp.com", None, Role::Recruiter, 60).unwrap();
        let session = decode_session("secret", &token).unwrap();
        assert_eq!(session.role, Role::Recruiter);
        assert_eq!(session.display_name(), "ana");

        assert!(decode_session("other-secret", &token).is_none());
    }

    #[test]
    fn display_name_prefers_the_token_name() {
        let session = StaffSession {
            email: "ana@corp.com".into(),
            name: Some("Ana Ruiz".into()),
            role: Role::Admin,
        };
        assert_eq!(session.display_name(), "Ana Ruiz");
        assert!(session.is_admin());
    }
}
