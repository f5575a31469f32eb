mod entry;
mod identity;
mod menu;
mod probe;
mod rooms;
mod send;

use axum::{Router, routing::get};

use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page<'a> {
    Entry,
    Menu(&'a str),
    TestConnection(&'a str),
    ViewIdentity(&'a str),
    ListRooms(&'a str),
    SendMessage(&'a str),
}

impl Page<'_> {
    pub fn path(&self) -> String {
        let (prefix, token) = match self {
            Page::Entry => return "/".to_owned(),
            Page::Menu(token) => ("menu", token),
            Page::TestConnection(token) => ("test_connection", token),
            Page::ViewIdentity(token) => ("view_user_info", token),
            Page::ListRooms(token) => ("list_rooms", token),
            Page::SendMessage(token) => ("send_message", token),
        };
        format!("/{prefix}/{}", urlencoding::encode(token))
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(entry::entry_page).post(entry::submit_token))
        .route("/menu/{token}", get(menu::menu))
        .route("/test_connection/{token}", get(probe::test_connection))
        .route("/view_user_info/{token}", get(identity::view_identity))
        .route("/list_rooms/{token}", get(rooms::list_rooms))
        .route("/send_message/{token}", get(send::send_message_page).post(send::send_message))
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn paths_embed_the_token() {
        assert_eq!(Page::Entry.path(), "/");
        assert_eq!(Page::Menu("abc123").path(), "/menu/abc123");
        assert_eq!(Page::TestConnection("abc123").path(), "/test_connection/abc123");
        assert_eq!(Page::ViewIdentity("abc123").path(), "/view_user_info/abc123");
        assert_eq!(Page::ListRooms("abc123").path(), "/list_rooms/abc123");
        assert_eq!(Page::SendMessage("abc123").path(), "/send_message/abc123");
    }

    #[test]
    fn tokens_are_percent_encoded() {
        assert_eq!(Page::Menu("a/b c?").path(), "/menu/a%2Fb%20c%3F");
    }
}
