use std::sync::Arc;

use axum::{
    Form, debug_handler,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::info;

use crate::{AppResult, AppState, config::Config, include_res, notice, res::{self, escape_html}, webex::{OutboundMessage, WebexClient}};

use super::Page;

#[derive(Deserialize)]
pub(crate) struct SendMessageForm {
    #[serde(default)]
    room_id: String,
    #[serde(default)]
    message: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn send_message_page(
    Path(token): Path<String>,
    State(webex): State<WebexClient>,
    State(config): State<Arc<Config>>,
    session: Session,
) -> AppResult<Response> {
    let Some(rooms) = webex.fetch_rooms(&token, config.room_limit).await else {
        return notice::redirect(&session, notice::ROOMS_FOR_SEND_FAILED, Page::Menu(&token)).await;
    };

    let mut room_options = String::new();
    for room in &rooms {
        room_options += &include_res!(str, "/pages/room_option.html")
            .replace("{id}", &escape_html(&room.id))
            .replace("{title}", &escape_html(room.title.as_deref().unwrap_or(&room.id)));
    }

    let notice = notice::take(&session).await?;
    let body = include_res!(str, "/pages/send_message.html")
        .replace("{action}", &Page::SendMessage(&token).path())
        .replace("{room_options}", &room_options)
        .replace("{menu}", &Page::Menu(&token).path());

    Ok(res::layout("Send a message", notice, &body).into_response())
}

#[debug_handler(state = AppState)]
pub(crate) async fn send_message(
    Path(token): Path<String>,
    State(webex): State<WebexClient>,
    session: Session,
    Form(SendMessageForm { room_id, message }): Form<SendMessageForm>,
) -> AppResult<Response> {
    let outbound = OutboundMessage { room_id, text: message };

    let text = if webex.send_message(&token, &outbound).await {
        info!("message posted to room {}", outbound.room_id);
        notice::MESSAGE_SENT
    } else {
        notice::MESSAGE_FAILED
    };

    notice::redirect(&session, text, Page::Menu(&token)).await
}
