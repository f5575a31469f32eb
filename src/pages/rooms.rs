use std::sync::Arc;

use axum::{
    debug_handler,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::{AppResult, AppState, config::Config, include_res, notice, res::{self, escape_html}, webex::{Room, WebexClient}};

use super::Page;

#[debug_handler(state = AppState)]
pub(crate) async fn list_rooms(
    Path(token): Path<String>,
    State(webex): State<WebexClient>,
    State(config): State<Arc<Config>>,
    session: Session,
) -> AppResult<Response> {
    let Some(rooms) = webex.fetch_rooms(&token, config.room_limit).await else {
        return notice::redirect(&session, notice::ROOMS_FAILED, Page::Menu(&token)).await;
    };

    let room_items = if rooms.is_empty() {
        include_res!(str, "/pages/rooms_empty.html").to_owned()
    } else {
        rooms.iter().map(room_item).collect()
    };

    let notice = notice::take(&session).await?;
    let body = include_res!(str, "/pages/rooms.html")
        .replace("{limit}", &config.room_limit.to_string())
        .replace("{room_items}", &room_items)
        .replace("{menu}", &Page::Menu(&token).path());

    Ok(res::layout("Rooms", notice, &body).into_response())
}

fn room_item(room: &Room) -> String {
    include_res!(str, "/pages/room_item.html")
        .replace("{title}", &escape_html(room.title.as_deref().unwrap_or("(untitled)")))
        .replace("{type}", &escape_html(room.room_type.as_deref().unwrap_or("unknown")))
        .replace("{id}", &escape_html(&room.id))
}
