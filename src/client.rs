use std::time::Duration;

use bytes::Bytes;
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::{
    validate_credentials, validate_signup, AuthClient, AuthResponse, Credentials,
    SignupCredentials,
};
use crate::config::ClientConfig;
use crate::error::{self, ApiError};
use crate::files::UploadFile;
use crate::query::{self, ListOptions, Paginated};
use crate::session::store::{FileSessionStore, SessionStore};
use crate::session::{Session, SessionHandle};

/// A multipart body described as data so the wrapper can rebuild it for
/// the post-refresh retry (`reqwest::multipart::Form` is consumed on send).
#[derive(Debug, Clone, Default)]
pub struct FormPayload {
    fields: Vec<(String, FormValue)>,
}

#[derive(Debug, Clone)]
enum FormValue {
    Text(String),
    File(UploadFile),
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), FormValue::Text(value.into())));
        self
    }

    pub fn maybe_text(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    pub fn file(mut self, name: &str, file: UploadFile) -> Self {
        self.fields.push((name.to_string(), FormValue::File(file)));
        self
    }

    fn build(&self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in &self.fields {
            form = match value {
                FormValue::Text(text) => form.text(name.clone(), text.clone()),
                FormValue::File(file) => form.part(name.clone(), file.clone().into_part()?),
            };
        }
        Ok(form)
    }
}

#[derive(Clone)]
enum Body {
    Empty,
    Json(serde_json::Value),
    Multipart(FormPayload),
}

/// Issues requests against the back-office API, attaching the stored
/// bearer token and transparently recovering from a single expired-access-
/// token condition on mutating calls.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionHandle,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: SessionHandle) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(ApiError::from)?;

        Ok(ApiClient {
            http,
            base_url: config.api_base_url.clone(),
            session,
        })
    }

    /// Environment-configured client with a file-backed session store.
    pub fn from_env() -> Result<Self, ApiError> {
        let config = ClientConfig::from_env().map_err(ApiError::Validation)?;
        let store = FileSessionStore::new(config.session_file.clone());
        let session = SessionHandle::new(Box::new(store))?;
        Self::new(&config, session)
    }

    pub fn with_store(
        config: &ClientConfig,
        store: Box<dyn SessionStore>,
    ) -> Result<Self, ApiError> {
        let session = SessionHandle::new(store)?;
        Self::new(config, session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    // ---- auth flows -----------------------------------------------------

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        validate_credentials(credentials)?;
        let auth = AuthClient::new(&self.http, &self.base_url)
            .login(credentials)
            .await?;
        self.session.set_session(Session::from_auth_response(&auth))?;
        Ok(auth)
    }

    pub async fn signup(&self, credentials: &SignupCredentials) -> Result<AuthResponse, ApiError> {
        validate_signup(credentials)?;
        let auth = AuthClient::new(&self.http, &self.base_url)
            .signup(credentials)
            .await?;
        self.session.set_session(Session::from_auth_response(&auth))?;
        Ok(auth)
    }

    /// Best-effort server-side logout; local state is cleared regardless of
    /// whether the API call succeeds.
    pub async fn logout(&self) -> Result<(), ApiError> {
        if let Some(token) = self.session.access_token() {
            if let Err(e) = AuthClient::new(&self.http, &self.base_url)
                .logout(&token)
                .await
            {
                warn!(error = %e, "Logout API call failed");
            }
        }
        self.session.clear()
    }

    /// Exchange the stored refresh token for a new session and persist it.
    pub async fn refresh_session(&self) -> Result<AuthResponse, ApiError> {
        let refresh_token = self
            .session
            .refresh_token()
            .ok_or_else(|| ApiError::Unauthorized("No refresh token available".to_string()))?;
        let auth = AuthClient::new(&self.http, &self.base_url)
            .refresh(&refresh_token)
            .await?;
        self.session.set_session(Session::from_auth_response(&auth))?;
        Ok(auth)
    }

    // ---- typed request surface ------------------------------------------

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &str) -> Result<T, ApiError> {
        let response = self
            .execute(Method::GET, &self.url(path, query), Body::Empty, true)
            .await?;
        check_json(response).await
    }

    pub async fn get_list<T: DeserializeOwned, F: Serialize>(
        &self,
        path: &str,
        filter: &F,
        options: &ListOptions,
    ) -> Result<Paginated<T>, ApiError> {
        let query = query::list_query(filter, options)?;
        let response = self
            .execute(Method::GET, &self.url(path, &query), Body::Empty, true)
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(error::from_response(status, &body));
        }
        query::parse_list(&body)
    }

    pub async fn get_bytes(&self, path: &str) -> Result<Bytes, ApiError> {
        let response = self
            .execute(Method::GET, &self.url(path, ""), Body::Empty, true)
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(error::from_response(status, &body));
        }
        Ok(body)
    }

    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(
                Method::POST,
                &self.url(path, ""),
                Body::Json(serde_json::to_value(body)?),
                true,
            )
            .await?;
        check_json(response).await
    }

    pub async fn patch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(
                Method::PATCH,
                &self.url(path, ""),
                Body::Json(serde_json::to_value(body)?),
                true,
            )
            .await?;
        check_json(response).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: FormPayload,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(
                Method::POST,
                &self.url(path, ""),
                Body::Multipart(payload),
                true,
            )
            .await?;
        check_json(response).await
    }

    pub async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: FormPayload,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(
                Method::PATCH,
                &self.url(path, ""),
                Body::Multipart(payload),
                true,
            )
            .await?;
        check_json(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .execute(Method::DELETE, &self.url(path, ""), Body::Empty, true)
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await?;
            return Err(error::from_response(status, &body));
        }
        Ok(())
    }

    /// POST to an endpoint that accepts unauthenticated submissions
    /// (registrations, applications, contact). No fail-fast, no bearer,
    /// no refresh.
    pub async fn post_public_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(
                Method::POST,
                &self.url(path, ""),
                Body::Json(serde_json::to_value(body)?),
                false,
            )
            .await?;
        check_json(response).await
    }

    pub async fn post_public_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: FormPayload,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(
                Method::POST,
                &self.url(path, ""),
                Body::Multipart(payload),
                false,
            )
            .await?;
        check_json(response).await
    }

    // ---- wrapper core ---------------------------------------------------

    fn url(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{query}", self.base_url)
        }
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        body: &Body,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        let mut request = self.http.request(method.clone(), url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request = match body {
            Body::Empty => request,
            Body::Json(value) => request.json(value),
            // No explicit content type: the transport sets the multipart
            // boundary itself.
            Body::Multipart(payload) => request.multipart(payload.build()?),
        };
        Ok(request.send().await?)
    }

    /// Attach credentials and issue the request; on a 401 to a mutating
    /// verb, refresh once and retry once. A second 401 is terminal.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Body,
        authenticated: bool,
    ) -> Result<Response, ApiError> {
        let mutating = method == Method::POST
            || method == Method::PUT
            || method == Method::PATCH
            || method == Method::DELETE;

        if !authenticated {
            return self.send_once(&method, url, &body, None).await;
        }

        // Known-doomed mutating requests fail before the network round trip.
        if mutating && !self.session.is_authenticated() {
            return Err(ApiError::Unauthorized(
                "Authentication required. Please log in.".to_string(),
            ));
        }

        let token = self.session.access_token();
        let response = self
            .send_once(&method, url, &body, token.as_deref())
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED || !mutating {
            return Ok(response);
        }

        if !self.session.is_refresh_token_valid() {
            debug!("Refresh token missing or expired, clearing session");
            self.session.clear()?;
            return Ok(response);
        }

        match self.refresh_session().await {
            Ok(_) => {
                debug!(url = %url, "Access token refreshed, retrying request");
                let token = self.session.access_token();
                self.send_once(&method, url, &body, token.as_deref()).await
            }
            Err(e) => {
                warn!(error = %e, "Token refresh failed, clearing session");
                self.session.clear()?;
                Ok(response)
            }
        }
    }
}

async fn check_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(error::from_response(status, &body));
    }
    serde_json::from_slice(&body).map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")))
}
