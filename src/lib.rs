pub mod config;
pub mod notice;
pub mod pages;
pub mod res;
pub mod webex;

use std::sync::Arc;

use axum::{
    Router,
    extract::FromRef,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::{Key, SameSite}};
use tracing::{error, warn};

use config::Config;
use webex::WebexClient;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub webex: WebexClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<AppState> {
        Ok(AppState {
            webex: WebexClient::new(config.api_base.clone(), config.timeout)?,
            config: Arc::new(config),
        })
    }
}

// Tokens travel in the path, so no response may leak the URL through `Referer`.
pub fn app(state: AppState) -> anyhow::Result<Router> {
    let config = &state.config;

    let key = match &config.session_secret {
        Some(secret) => Key::try_from(secret.as_bytes())?,
        None => {
            warn!("no session secret configured, signing session cookies with a random key");
            Key::generate()
        }
    };

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(config.session_inactivity))
        .with_signed(key);

    Ok(pages::router()
        .with_state(state)
        .layer(session_layer)
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(TraceLayer::new_for_http()))
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("{:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
