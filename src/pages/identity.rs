use axum::{
    debug_handler,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::{AppResult, AppState, include_res, notice, res::{self, escape_html}, webex::{Person, WebexClient}};

use super::Page;

#[debug_handler(state = AppState)]
pub(crate) async fn view_identity(
    Path(token): Path<String>,
    State(webex): State<WebexClient>,
    session: Session,
) -> AppResult<Response> {
    let Some(person) = webex.fetch_identity(&token).await else {
        return notice::redirect(&session, notice::IDENTITY_FAILED, Page::Menu(&token)).await;
    };

    let notice = notice::take(&session).await?;
    let body = include_res!(str, "/pages/identity.html")
        .replace("{fields}", &identity_rows(&person))
        .replace("{menu}", &Page::Menu(&token).path());

    Ok(res::layout("Your Webex profile", notice, &body).into_response())
}

fn identity_rows(person: &Person) -> String {
    let emails = person.emails.join(", ");
    let fields = [
        ("Display name", person.display_name.as_deref()),
        ("Nickname", person.nick_name.as_deref()),
        ("Emails", Some(emails.as_str()).filter(|e| !e.is_empty())),
        ("ID", person.id.as_deref()),
        ("Organization", person.org_id.as_deref()),
        ("Type", person.person_type.as_deref()),
        ("Status", person.status.as_deref()),
        ("Created", person.created.as_deref()),
    ];

    let mut rows = String::new();
    for (label, value) in fields {
        let Some(value) = value else {
            continue;
        };
        rows += &include_res!(str, "/pages/field_row.html")
            .replace("{label}", label)
            .replace("{value}", &escape_html(value));
    }
    rows
}
