use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};

/// What kind of entity a suggestion points at.
/// The search endpoint sends this as a plain string in the `type` field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum SuggestionKind {
    Artist,
    Location,
    Date,
    /// Kinds without a detail page of their own, e.g. `member` or `creation`
    Other(String),
}

impl SuggestionKind {
    pub fn label(&self) -> &str {
        match self {
            SuggestionKind::Artist => "artist",
            SuggestionKind::Location => "location",
            SuggestionKind::Date => "date",
            SuggestionKind::Other(label) => label,
        }
    }
}

impl From<String> for SuggestionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "artist" => SuggestionKind::Artist,
            "location" => SuggestionKind::Location,
            "date" => SuggestionKind::Date,
            _ => SuggestionKind::Other(value),
        }
    }
}

impl From<SuggestionKind> for String {
    fn from(value: SuggestionKind) -> Self {
        match value {
            SuggestionKind::Other(label) => label,
            kind => kind.label().to_string(),
        }
    }
}

impl Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum SuggestionId {
    Number(i64),
    Text(String),
}

impl Display for SuggestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionId::Number(number) => write!(f, "{number}"),
            SuggestionId::Text(text) => write!(f, "{text}"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SuggestionResult {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub id: SuggestionId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl SuggestionResult {
    /// The secondary label, if the server sent one worth showing.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref().filter(|context| !context.is_empty())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<SuggestionResult>,
}

/// The backend encodes an empty result set as `null` rather than `[]`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
