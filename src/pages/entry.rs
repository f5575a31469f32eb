use axum::{
    Form, debug_handler,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::info;

use crate::{AppResult, AppState, include_res, notice, res, webex::WebexClient};

use super::Page;

#[derive(Deserialize)]
pub(crate) struct TokenForm {
    #[serde(default)]
    access_token: String,
}

#[debug_handler]
pub(crate) async fn entry_page(session: Session) -> AppResult<Response> {
    let notice = notice::take(&session).await?;
    Ok(res::layout("Webex Desk", notice, include_res!(str, "/pages/entry.html")).into_response())
}

#[debug_handler(state = AppState)]
pub(crate) async fn submit_token(
    State(webex): State<WebexClient>,
    session: Session,
    Form(TokenForm { access_token }): Form<TokenForm>,
) -> AppResult<Response> {
    if webex.fetch_identity(&access_token).await.is_none() {
        return notice::redirect(&session, notice::INVALID_TOKEN, Page::Entry).await;
    }

    info!("access token accepted");
    Ok(Redirect::to(&Page::Menu(&access_token).path()).into_response())
}
