pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod files;
pub mod models;
pub mod pagination;
pub mod query;
pub mod services;
pub mod session;
pub mod validate;

pub use auth::{AuthResponse, Credentials, SignupCredentials, TokenInfo, Tokens};
pub use client::{ApiClient, FormPayload};
pub use config::ClientConfig;
pub use error::ApiError;
pub use files::UploadFile;
pub use query::{ListOptions, Order, Paginated};
pub use session::store::{FileSessionStore, MemorySessionStore, SessionStore};
pub use session::{Session, SessionHandle};
