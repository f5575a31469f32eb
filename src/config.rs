use std::{net::SocketAddr, time::Duration};

use anyhow::{Context, bail};

use crate::webex::{DEFAULT_API_BASE, DEFAULT_ROOM_LIMIT};

pub const BIND: &str = "WEBEXDESK_BIND";
pub const API_BASE: &str = "WEBEX_API_BASE";
pub const ROOM_LIMIT: &str = "WEBEXDESK_ROOM_LIMIT";
pub const TIMEOUT_SECS: &str = "WEBEXDESK_TIMEOUT_SECS";
pub const SESSION_MINUTES: &str = "WEBEXDESK_SESSION_MINUTES";
pub const SECURE_COOKIES: &str = "WEBEXDESK_SECURE_COOKIES";
pub const SESSION_SECRET: &str = "WEBEXDESK_SESSION_SECRET";

pub const MIN_SECRET_LEN: usize = 64;

#[derive(Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub api_base: String,
    pub room_limit: usize,
    pub timeout: Option<Duration>,
    pub session_inactivity: time::Duration,
    pub secure_cookies: bool,
    pub session_secret: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            api_base: DEFAULT_API_BASE.to_owned(),
            room_limit: DEFAULT_ROOM_LIMIT,
            timeout: None,
            session_inactivity: time::Duration::minutes(5),
            secure_cookies: false,
            session_secret: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
        let mut config = Config::default();

        if let Some(bind) = lookup(BIND) {
            config.bind = bind.parse().with_context(|| format!("{BIND}={bind} is not a socket address"))?;
        }
        if let Some(api_base) = lookup(API_BASE) {
            config.api_base = api_base;
        }
        if let Some(limit) = lookup(ROOM_LIMIT) {
            config.room_limit = limit.parse().with_context(|| format!("{ROOM_LIMIT}={limit} is not a number"))?;
            if config.room_limit == 0 {
                bail!("{ROOM_LIMIT} must be at least 1");
            }
        }
        if let Some(secs) = lookup(TIMEOUT_SECS) {
            let secs: u64 = secs.parse().with_context(|| format!("{TIMEOUT_SECS}={secs} is not a number"))?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(minutes) = lookup(SESSION_MINUTES) {
            let minutes: i64 = minutes.parse().with_context(|| format!("{SESSION_MINUTES}={minutes} is not a number"))?;
            config.session_inactivity = time::Duration::minutes(minutes);
        }
        if let Some(secure) = lookup(SECURE_COOKIES) {
            config.secure_cookies = secure.parse().with_context(|| format!("{SECURE_COOKIES}={secure} is not true or false"))?;
        }
        if let Some(secret) = lookup(SESSION_SECRET) {
            if secret.len() < MIN_SECRET_LEN {
                bail!("{SESSION_SECRET} must be at least {MIN_SECRET_LEN} bytes");
            }
            config.session_secret = Some(secret);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind.to_string(), "127.0.0.1:5000");
        assert_eq!(config.api_base, "https://webexapis.com/v1");
        assert_eq!(config.room_limit, 5);
        assert!(config.timeout.is_none());
        assert!(!config.secure_cookies);
        assert!(config.session_secret.is_none());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            (BIND, "0.0.0.0:8080"),
            (API_BASE, "http://localhost:1234"),
            (ROOM_LIMIT, "10"),
            (TIMEOUT_SECS, "30"),
            (SESSION_MINUTES, "15"),
            (SECURE_COOKIES, "true"),
        ]))
        .unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.api_base, "http://localhost:1234");
        assert_eq!(config.room_limit, 10);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.session_inactivity, time::Duration::minutes(15));
        assert!(config.secure_cookies);
    }

    #[test]
    fn zero_room_limit_is_rejected() {
        assert!(Config::from_lookup(lookup(&[(ROOM_LIMIT, "0")])).is_err());
    }

    #[test]
    fn short_session_secret_is_rejected() {
        assert!(Config::from_lookup(lookup(&[(SESSION_SECRET, "hunter2")])).is_err());

        let long = "k".repeat(MIN_SECRET_LEN);
        let config = Config::from_lookup(lookup(&[(SESSION_SECRET, &long)])).unwrap();
        assert_eq!(config.session_secret.as_deref(), Some(long.as_str()));
    }

    #[test]
    fn garbage_bind_address_is_rejected() {
        assert!(Config::from_lookup(lookup(&[(BIND, "not-an-address")])).is_err());
    }
}
