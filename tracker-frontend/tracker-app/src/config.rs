use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "/search";
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_INPUT_ID: &str = "searchInput";
pub const DEFAULT_PANEL_ID: &str = "searchSuggestions";
pub const DEFAULT_PLACEHOLDER: &str = "Search artists, members, locations, dates...";

/// Where a clicked suggestion sends the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetPolicy {
    /// artist, location and date rows each open their own detail page
    #[default]
    ByKind,
    /// every row opens the artist page for its id
    ArtistOnly,
}

/// Settings for one mounted search box. Every field has a default, so hosts
/// only need to pass what they want to change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutocompleteConfig {
    /// Scheme and host put in front of `endpoint`, e.g. `http://localhost:8081`.
    /// In the browser this stays unset and the endpoint resolves against the page.
    pub origin: Option<String>,
    pub endpoint: String,
    /// Shortest trimmed query (in characters) that triggers a search.
    /// Zero behaves like one: an empty query never searches.
    pub min_query_len: usize,
    pub debounce_ms: u64,
    pub target_policy: TargetPolicy,
    pub input_id: String,
    pub panel_id: String,
    pub placeholder: String,
}

impl AutocompleteConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn qualifies(&self, query: &str) -> bool {
        query.chars().count() >= self.min_query_len.max(1)
    }
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            origin: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            target_policy: TargetPolicy::default(),
            input_id: DEFAULT_INPUT_ID.to_string(),
            panel_id: DEFAULT_PANEL_ID.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: AutocompleteConfig =
            serde_json::from_str(r#"{"debounceMs": 150, "targetPolicy": "artistOnly"}"#).unwrap();
        assert_eq!(config.debounce(), Duration::from_millis(150));
        assert_eq!(config.target_policy, TargetPolicy::ArtistOnly);
        assert_eq!(config.min_query_len, DEFAULT_MIN_QUERY_LEN);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.origin, None);
    }

    #[test]
    fn threshold() {
        let config = AutocompleteConfig::default();
        assert!(!config.qualifies(""));
        assert!(!config.qualifies("a"));
        assert!(config.qualifies("ab"));
        // counted in characters, not bytes
        assert!(!config.qualifies("é"));

        let config = AutocompleteConfig {
            min_query_len: 0,
            ..Default::default()
        };
        assert!(!config.qualifies(""));
        assert!(config.qualifies("a"));
    }
}
