use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use propdesk::session::Session;
use propdesk::models::User;

pub const TEST_EMAIL: &str = "admin@test.com";
pub const TEST_PASSWORD: &str = "password123";

/// Shared state for the in-process mock API. Counters let tests assert
/// exactly how many requests reached the server.
pub struct ApiState {
    /// The access token the server currently accepts.
    pub valid_access: Mutex<String>,
    /// The refresh token the server currently accepts.
    pub valid_refresh: Mutex<String>,
    /// When true, a successful refresh hands out a token the server will
    /// then reject, so the retried request 401s again.
    pub refresh_breaks_access: bool,
    pub refresh_calls: AtomicUsize,
    pub protected_hits: AtomicUsize,
    pub last_list_query: Mutex<Option<String>>,
    pub last_auth_header: Mutex<Option<Option<String>>>,
    pub last_multipart_fields: Mutex<Vec<String>>,
}

pub struct MockApi {
    pub addr: SocketAddr,
    pub state: Arc<ApiState>,
}

impl MockApi {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn refresh_calls(&self) -> usize {
        self.state.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn protected_hits(&self) -> usize {
        self.state.protected_hits.load(Ordering::SeqCst)
    }
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from)
}

fn auth_envelope(access: &str, refresh: &str) -> Value {
    json!({
        "user": { "id": "u1", "email": TEST_EMAIL, "name": "Admin", "role": "admin" },
        "tokens": {
            "access": {
                "token": access,
                "expires": (Utc::now() + Duration::minutes(15)).to_rfc3339(),
            },
            "refresh": {
                "token": refresh,
                "expires": (Utc::now() + Duration::days(7)).to_rfc3339(),
            },
        },
    })
}

fn call_json(id: &str) -> Value {
    json!({
        "id": id,
        "phoneNumber": "+971500000000",
        "direction": "INBOUND",
        "discussionResume": "Asked about payment plans",
        "createdAt": Utc::now().to_rfc3339(),
        "updatedAt": Utc::now().to_rfc3339(),
    })
}

fn property_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Marina Heights",
        "status": "off plan",
        "price": 1_200_000,
        "createdAt": Utc::now().to_rfc3339(),
        "updatedAt": Utc::now().to_rfc3339(),
    })
}

async fn login(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if body["email"] == TEST_EMAIL && body["password"] == TEST_PASSWORD {
        *state.valid_access.lock().unwrap() = "access-1".to_string();
        *state.valid_refresh.lock().unwrap() = "refresh-1".to_string();
        (StatusCode::OK, Json(auth_envelope("access-1", "refresh-1")))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Incorrect email or password" })),
        )
    }
}

async fn refresh_tokens(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.refresh_calls.fetch_add(1, Ordering::SeqCst);

    let expected = state.valid_refresh.lock().unwrap().clone();
    if body["refreshToken"] == expected.as_str() {
        *state.valid_access.lock().unwrap() = if state.refresh_breaks_access {
            "token-the-server-forgot".to_string()
        } else {
            "access-2".to_string()
        };
        *state.valid_refresh.lock().unwrap() = "refresh-2".to_string();
        (StatusCode::OK, Json(auth_envelope("access-2", "refresh-2")))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid refresh token" })),
        )
    }
}

async fn logout(State(_state): State<Arc<ApiState>>) -> (StatusCode, Json<Value>) {
    // Always fails, so tests can assert the client clears local state anyway.
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "logout unavailable" })),
    )
}

fn authorized(state: &ApiState, headers: &HeaderMap) -> bool {
    bearer(headers).as_deref() == Some(state.valid_access.lock().unwrap().as_str())
}

async fn calls_create(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(_body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.protected_hits.fetch_add(1, Ordering::SeqCst);
    if authorized(&state, &headers) {
        (StatusCode::OK, Json(call_json("c1")))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "jwt expired" })),
        )
    }
}

async fn calls_list(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> (StatusCode, Json<Value>) {
    *state.last_list_query.lock().unwrap() = query;
    if !authorized(&state, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "jwt expired" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "results": [call_json("c1")],
            "page": 1,
            "limit": 10,
            "totalPages": 1,
            "totalResults": 1,
        })),
    )
}

async fn call_get(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&state, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "jwt expired" })),
        );
    }
    if id == "c1" {
        (StatusCode::OK, Json(call_json("c1")))
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Call not found" })),
        )
    }
}

async fn call_delete(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(_id): Path<String>,
) -> (StatusCode, Json<Value>) {
    state.protected_hits.fetch_add(1, Ordering::SeqCst);
    if authorized(&state, &headers) {
        (StatusCode::OK, Json(json!({ "message": "deleted" })))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "jwt expired" })),
        )
    }
}

async fn properties_list(
    State(state): State<Arc<ApiState>>,
    RawQuery(query): RawQuery,
) -> (StatusCode, Json<Value>) {
    *state.last_list_query.lock().unwrap() = query;
    (
        StatusCode::OK,
        Json(json!({
            "results": [property_json("p1")],
            "page": 2,
            "limit": 10,
            "totalPages": 5,
            "totalResults": 42,
        })),
    )
}

async fn register_create(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    *state.last_auth_header.lock().unwrap() = Some(bearer(&headers));
    (
        StatusCode::OK,
        Json(json!({
            "id": "r1",
            "fullName": body["fullName"],
            "email": body["email"],
            "phoneNumber": body["phoneNumber"],
            "profileType": body["profileType"],
            "createdAt": Utc::now().to_rfc3339(),
            "updatedAt": Utc::now().to_rfc3339(),
        })),
    )
}

async fn applications_create(
    State(state): State<Arc<ApiState>>,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        if let Some(name) = field.name() {
            fields.push(name.to_string());
        }
        let _ = field.bytes().await;
    }
    *state.last_multipart_fields.lock().unwrap() = fields;
    (
        StatusCode::OK,
        Json(json!({
            "id": "a1",
            "fullName": "Jane Doe",
            "emailAddress": "jane@example.com",
            "jobId": { "id": "j1", "name": "Agent", "type": "full time", "location": "Dubai" },
            "yearsOfExperience": 4,
            "uploadedCvPath": "cvs/a1.pdf",
            "createdAt": Utc::now().to_rfc3339(),
            "updatedAt": Utc::now().to_rfc3339(),
        })),
    )
}

async fn contact_create(Json(_body): Json<Value>) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "message": "Message received" })))
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Spawn the mock API on a random port.
pub async fn spawn_mock_api(refresh_breaks_access: bool) -> MockApi {
    let _ = dotenvy::dotenv();
    init_tracing();

    let state = Arc::new(ApiState {
        valid_access: Mutex::new("server-side-valid".to_string()),
        valid_refresh: Mutex::new("refresh-1".to_string()),
        refresh_breaks_access,
        refresh_calls: AtomicUsize::new(0),
        protected_hits: AtomicUsize::new(0),
        last_list_query: Mutex::new(None),
        last_auth_header: Mutex::new(None),
        last_multipart_fields: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/refreshTokens", post(refresh_tokens))
        .route("/auth/logout", post(logout))
        .route("/calls", get(calls_list).post(calls_create))
        .route("/calls/{id}", get(call_get).delete(call_delete))
        .route("/properties", get(properties_list))
        .route("/register", post(register_create))
        .route("/applications", post(applications_create))
        .route("/contact", post(contact_create))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock API port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock API failed");
    });

    MockApi { addr, state }
}

/// A session whose tokens/expiries the test controls directly.
pub fn session_with(
    access_token: &str,
    refresh_token: &str,
    access_expires_in_mins: i64,
    refresh_expires_in_mins: i64,
) -> Session {
    Session {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
        access_token_expires: Some(Utc::now() + Duration::minutes(access_expires_in_mins)),
        refresh_token_expires: Some(Utc::now() + Duration::minutes(refresh_expires_in_mins)),
        user_email: TEST_EMAIL.to_string(),
        user_data: User {
            id: "u1".to_string(),
            email: TEST_EMAIL.to_string(),
            name: Some("Admin".to_string()),
            role: Some("admin".to_string()),
            is_email_verified: None,
            created_at: None,
            updated_at: None,
        },
    }
}
