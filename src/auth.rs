use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::models::User;
use crate::validate;

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct SignupCredentials {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfo {
    pub token: String,
    pub expires: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tokens {
    pub access: TokenInfo,
    pub refresh: TokenInfo,
}

/// `{ user, tokens: { access, refresh }, message? }` envelope returned by
/// login, signup and refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub tokens: Tokens,
    #[serde(default)]
    pub message: Option<String>,
}

/// Checks run before any network call; failures mean the request is never
/// issued.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), ApiError> {
    if credentials.email.is_empty() || credentials.password.is_empty() {
        return Err(ApiError::Validation("Please fill in all fields".to_string()));
    }
    if !validate::is_valid_email(&credentials.email) {
        return Err(ApiError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_signup(credentials: &SignupCredentials) -> Result<(), ApiError> {
    validate_credentials(&Credentials {
        email: credentials.email.clone(),
        password: credentials.password.clone(),
    })?;
    if credentials.confirm_password.is_empty() {
        return Err(ApiError::Validation(
            "Please confirm your password".to_string(),
        ));
    }
    if credentials.password != credentials.confirm_password {
        return Err(ApiError::Validation("Passwords do not match".to_string()));
    }
    if credentials.password.len() < 6 {
        return Err(ApiError::Validation(
            "Password must be at least 6 characters long".to_string(),
        ));
    }
    Ok(())
}

/// Raw calls against `/auth/*`. These never go through the authenticated
/// wrapper; the wrapper depends on them for refresh.
pub(crate) struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    pub(crate) async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        debug!(url = %url, email = %credentials.email, "Attempting login");

        let response = self.http.post(&url).json(credentials).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let auth: AuthResponse = serde_json::from_slice(&body)
                .map_err(|e| ApiError::Parse(format!("Failed to parse login response: {e}")))?;
            info!(email = %auth.user.email, "Login successful");
            Ok(auth)
        } else {
            warn!(status = %status, "Login failed");
            Err(ApiError::Unauthorized(
                server_message(&body).unwrap_or_else(|| "Login failed".to_string()),
            ))
        }
    }

    pub(crate) async fn signup(
        &self,
        credentials: &SignupCredentials,
    ) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/auth/signup", self.base_url);
        debug!(url = %url, email = %credentials.email, "Attempting signup");

        // The confirm-password field is validated client-side and never sent.
        let payload = Credentials {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        };

        let response = self.http.post(&url).json(&payload).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let auth: AuthResponse = serde_json::from_slice(&body)
                .map_err(|e| ApiError::Parse(format!("Failed to parse signup response: {e}")))?;
            info!(email = %auth.user.email, "Signup successful");
            Ok(auth)
        } else {
            Err(ApiError::Unauthorized(
                server_message(&body).unwrap_or_else(|| "Signup failed".to_string()),
            ))
        }
    }

    pub(crate) async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/auth/refreshTokens", self.base_url);
        debug!(url = %url, "Refreshing access token");

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "refreshToken": refresh_token }))
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let auth: AuthResponse = serde_json::from_slice(&body)
                .map_err(|e| ApiError::Parse(format!("Failed to parse refresh response: {e}")))?;
            debug!("Token refresh successful");
            Ok(auth)
        } else {
            warn!(status = %status, "Token refresh failed");
            Err(ApiError::Unauthorized(
                server_message(&body).unwrap_or_else(|| "Token refresh failed".to_string()),
            ))
        }
    }

    pub(crate) async fn logout(&self, access_token: &str) -> Result<(), ApiError> {
        let url = format!("{}/auth/logout", self.base_url);
        self.http
            .post(&url)
            .bearer_auth(access_token)
            .send()
            .await?;
        Ok(())
    }
}

fn server_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
}
