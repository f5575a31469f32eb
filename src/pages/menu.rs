use axum::{
    debug_handler,
    extract::Path,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::{AppResult, include_res, notice, res};

use super::Page;

#[debug_handler]
pub(crate) async fn menu(Path(token): Path<String>, session: Session) -> AppResult<Response> {
    let notice = notice::take(&session).await?;

    let body = include_res!(str, "/pages/menu.html")
        .replace("{test_connection}", &Page::TestConnection(&token).path())
        .replace("{view_user_info}", &Page::ViewIdentity(&token).path())
        .replace("{list_rooms}", &Page::ListRooms(&token).path())
        .replace("{send_message}", &Page::SendMessage(&token).path())
        .replace("{entry}", &Page::Entry.path());

    Ok(res::layout("Menu", notice, &body).into_response())
}
