use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub nick_name: Option<String>,
    pub emails: Vec<String>,
    pub org_id: Option<String>,
    #[serde(rename = "type")]
    pub person_type: Option<String>,
    pub status: Option<String>,
    pub created: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Room {
    pub id: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub is_locked: Option<bool>,
    pub last_activity: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListResult<T> {
    #[serde(default = "Vec::new")]
    pub(crate) items: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    pub room_id: String,
    pub text: String,
}
