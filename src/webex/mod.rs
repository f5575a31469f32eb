mod types;

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

pub use types::{OutboundMessage, Person, Room};
use types::ListResult;

pub const DEFAULT_API_BASE: &str = "https://webexapis.com/v1";
pub const DEFAULT_ROOM_LIMIT: usize = 5;

#[derive(Clone)]
pub struct WebexClient {
    web_client: reqwest::Client,
    api_base: String,
}

impl WebexClient {
    pub fn new(api_base: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::ClientBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            web_client: builder.build()?,
            api_base: api_base.into().trim_end_matches('/').to_owned(),
        })
    }

    async fn api_get<T: DeserializeOwned>(&self, rest_method: &str, token: &str) -> Option<T> {
        let url = format!("{}/{rest_method}", self.api_base);
        let res = match self.web_client.get(url).bearer_auth(token).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!("GET {rest_method} failed: {e}");
                return None;
            }
        };

        if res.status() != StatusCode::OK {
            warn!("GET {rest_method} returned {}", res.status());
            return None;
        }

        match res.json::<T>().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("GET {rest_method} returned an unreadable body: {e}");
                None
            }
        }
    }

    // An empty profile object means no identity.
    pub async fn fetch_identity(&self, token: &str) -> Option<Person> {
        let body: Value = self.api_get("people/me", token).await?;
        match &body {
            Value::Object(fields) if !fields.is_empty() => {}
            _ => {
                warn!("GET people/me returned an empty profile");
                return None;
            }
        }

        match serde_json::from_value(body) {
            Ok(person) => Some(person),
            Err(e) => {
                warn!("GET people/me returned an unreadable profile: {e}");
                None
            }
        }
    }

    // Rooms past `limit` are never decoded.
    pub async fn fetch_rooms(&self, token: &str, limit: usize) -> Option<Vec<Room>> {
        let ListResult { mut items } = self.api_get::<ListResult<Value>>("rooms", token).await?;
        debug!("rooms listing returned {} items, keeping {limit}", items.len());
        items.truncate(limit);

        let mut rooms = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<Room>(item) {
                Ok(room) => rooms.push(room),
                Err(e) => {
                    warn!("GET rooms returned an unreadable room: {e}");
                    return None;
                }
            }
        }
        Some(rooms)
    }

    pub async fn send_message(&self, token: &str, message: &OutboundMessage) -> bool {
        let url = format!("{}/messages", self.api_base);
        match self.web_client.post(url).bearer_auth(token).json(message).send().await {
            Ok(res) if res.status() == StatusCode::OK => true,
            Ok(res) => {
                warn!("POST messages returned {}", res.status());
                false
            }
            Err(e) => {
                warn!("POST messages failed: {e}");
                false
            }
        }
    }
}
