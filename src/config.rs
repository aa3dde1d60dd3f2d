//! Bootstrap Configuration
//!
//! Session parameters handed over by the hosting platform in the query
//! string when the mini-app is opened.

use percent_encoding::percent_decode_str;

/// Everything the form needs from the launch URL
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BootstrapConfig {
    /// Backend base URL, e.g. `https://shop.example.com`
    pub host: String,
    pub password: String,
    pub bot_id: i64,
    pub user_id: i64,
    pub message_id: i64,
    /// Category names offered in the select, JSON-encoded in the query
    pub categories: Vec<String>,
}

impl BootstrapConfig {
    /// Read the config from `window.location.search`
    pub fn from_location() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let search = web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            parse_query(&search)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }
}

/// Parse a raw query string (with or without the leading `?`).
///
/// Missing or malformed parameters fall back to empty strings, zero ids and
/// an empty category list; the form still renders and the backend rejects
/// the submission if the session data is unusable.
pub fn parse_query(query: &str) -> BootstrapConfig {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut config = BootstrapConfig::default();

    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = decode(value);
        match key {
            "host" => config.host = value,
            "password" => config.password = value,
            "bot_id" => config.bot_id = value.parse().unwrap_or(0),
            "user_id" => config.user_id = value.parse().unwrap_or(0),
            "message_id" => config.message_id = value.parse().unwrap_or(0),
            "categories" => {
                config.categories = serde_json::from_str(&value).unwrap_or_default();
            }
            _ => {}
        }
    }

    config
}

fn decode(value: &str) -> String {
    // '+' is a space in query strings
    let value = value.replace('+', " ");
    percent_decode_str(&value).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_query() {
        let cfg = parse_query(
            "?categories=%5B%22Shoes%22%2C%22Hats%22%5D&bot_id=42&password=s3cret&host=https%3A%2F%2Fapi.example.com&user_id=1001&message_id=77",
        );
        assert_eq!(cfg.host, "https://api.example.com");
        assert_eq!(cfg.password, "s3cret");
        assert_eq!(cfg.bot_id, 42);
        assert_eq!(cfg.user_id, 1001);
        assert_eq!(cfg.message_id, 77);
        assert_eq!(cfg.categories, vec!["Shoes".to_string(), "Hats".to_string()]);
    }

    #[test]
    fn missing_params_default() {
        let cfg = parse_query("");
        assert_eq!(cfg, BootstrapConfig::default());
        assert!(cfg.categories.is_empty());
        assert_eq!(cfg.bot_id, 0);
    }

    #[test]
    fn malformed_categories_fall_back_to_empty() {
        let cfg = parse_query("categories=not-json&bot_id=5");
        assert!(cfg.categories.is_empty());
        assert_eq!(cfg.bot_id, 5);
    }

    #[test]
    fn malformed_ids_fall_back_to_zero() {
        let cfg = parse_query("bot_id=abc&user_id=&message_id=12");
        assert_eq!(cfg.bot_id, 0);
        assert_eq!(cfg.user_id, 0);
        assert_eq!(cfg.message_id, 12);
    }

    #[test]
    fn unknown_params_are_ignored() {
        let cfg = parse_query("theme=dark&host=h");
        assert_eq!(cfg.host, "h");
    }

    #[test]
    fn plus_decodes_to_space_in_categories() {
        let cfg = parse_query("categories=%5B%22Head+wear%22%5D");
        assert_eq!(cfg.categories, vec!["Head wear".to_string()]);
    }
}
