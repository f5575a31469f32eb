use axum::{debug_handler, extract::{Path, State}, response::Response};
use tower_sessions::Session;

use crate::{AppResult, AppState, notice, webex::WebexClient};

use super::Page;

#[debug_handler(state = AppState)]
pub(crate) async fn test_connection(
    Path(token): Path<String>,
    State(webex): State<WebexClient>,
    session: Session,
) -> AppResult<Response> {
    let text = match webex.fetch_identity(&token).await {
        Some(_) => notice::CONNECTION_OK,
        None => notice::CONNECTION_FAILED,
    };

    notice::redirect(&session, text, Page::Menu(&token)).await
}
