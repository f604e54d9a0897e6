//! Admin authorization.
//!
//! Administrators present an HS256-signed JWT, either as
//! `Authorization: Bearer <token>` or, for browser pages, in the
//! `admin_token` cookie. The gate only answers authorized / unauthorized;
//! issuing tokens belongs to the identity provider.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{config::AuthConfig, messages, state::AppState};

pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    #[serde(default)]
    pub role: Option<String>,
    pub exp: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    MissingToken,
    InvalidToken(String),
    NotAdmin,
}

impl AdminError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingToken | Self::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            Self::NotAdmin => StatusCode::FORBIDDEN,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingToken | Self::InvalidToken(_) => messages::LOGIN_REQUIRED,
            Self::NotAdmin => messages::ADMIN_REQUIRED,
        }
    }
}

/// Verdict of one admin check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCheck {
    pub authorized: bool,
    pub error: Option<String>,
    pub status: Option<StatusCode>,
}

impl AdminCheck {
    pub fn allowed() -> Self {
        Self {
            authorized: true,
            error: None,
            status: None,
        }
    }

    pub fn denied(err: &AdminError) -> Self {
        Self {
            authorized: false,
            error: Some(err.message().to_string()),
            status: Some(err.status()),
        }
    }

    /// Convert a denial into an [`crate::Error::Unauthorized`].
    pub fn into_result(self) -> crate::Result<()> {
        if self.authorized {
            return Ok(());
        }
        Err(crate::Error::Unauthorized {
            status: self.status.unwrap_or(StatusCode::UNAUTHORIZED),
            message: self
                .error
                .unwrap_or_else(|| messages::LOGIN_REQUIRED.to_string()),
        })
    }
}

#[derive(Clone)]
pub struct AdminGate {
    enabled: bool,
    key: DecodingKey,
    admin_role: String,
}

impl AdminGate {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            enabled: config.admin_enabled,
            key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            admin_role: config.admin_role.clone(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn check_admin(&self, headers: &HeaderMap) -> AdminCheck {
        if !self.enabled {
            return AdminCheck::allowed();
        }

        match self.authenticate(headers) {
            Ok(claims) => {
                tracing::debug!(subject = %claims.sub, "Admin check passed");
                AdminCheck::allowed()
            }
            Err(err) => {
                tracing::debug!(reason = ?err, "Admin check denied");
                AdminCheck::denied(&err)
            }
        }
    }

    fn authenticate(&self, headers: &HeaderMap) -> Result<AdminClaims, AdminError> {
        let token = bearer_token(headers)?
            .or_else(|| cookie_token(headers))
            .ok_or(AdminError::MissingToken)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 60;

        let claims = decode::<AdminClaims>(&token, &self.key, &validation)
            .map_err(|e| AdminError::InvalidToken(e.to_string()))?
            .claims;

        if claims.role.as_deref() != Some(self.admin_role.as_str()) {
            return Err(AdminError::NotAdmin);
        }
        Ok(claims)
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<Option<String>, AdminError> {
    let Some(authz) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };
    let authz = authz.to_str().map_err(|_| {
        AdminError::InvalidToken("Authorization header is not valid UTF-8".to_string())
    })?;
    authz
        .strip_prefix("Bearer ")
        .or_else(|| authz.strip_prefix("bearer "))
        .map(|t| Some(t.trim().to_string()))
        .ok_or_else(|| {
            AdminError::InvalidToken("Authorization header must be 'Bearer <token>'".to_string())
        })
}

fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == ADMIN_TOKEN_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|v| !v.is_empty())
}

/// Gate for the HTML admin area; denials render an error page.
pub async fn admin_pages_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let check = state.admin.check_admin(req.headers());
    if check.authorized {
        return next.run(req).await;
    }
    let status = check.status.unwrap_or(StatusCode::UNAUTHORIZED);
    let message = check
        .error
        .unwrap_or_else(|| messages::LOGIN_REQUIRED.to_string());
    (status, crate::pages::error_page(&message, None)).into_response()
}
