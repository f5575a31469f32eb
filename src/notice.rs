use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::{AppResult, pages::Page};

const NOTICE: &str = "notice";

pub const INVALID_TOKEN: &str = "Invalid access token. Please try again.";
pub const CONNECTION_OK: &str = "Connection to Webex server was successful.";
pub const CONNECTION_FAILED: &str = "Failed to connect to Webex server. Please check your access token.";
pub const IDENTITY_FAILED: &str = "Failed to retrieve user information.";
pub const ROOMS_FAILED: &str = "Failed to retrieve rooms. Please check your access token or network connection.";
pub const ROOMS_FOR_SEND_FAILED: &str = "Failed to retrieve rooms.";
pub const MESSAGE_SENT: &str = "Message sent successfully.";
pub const MESSAGE_FAILED: &str = "Failed to send message.";

pub async fn set(session: &Session, text: &str) -> AppResult<()> {
    session.insert(NOTICE, text).await?;
    Ok(())
}

pub async fn take(session: &Session) -> AppResult<Option<String>> {
    Ok(session.remove::<String>(NOTICE).await?)
}

pub async fn redirect(session: &Session, text: &str, page: Page<'_>) -> AppResult<Response> {
    set(session, text).await?;
    Ok(Redirect::to(&page.path()).into_response())
}
