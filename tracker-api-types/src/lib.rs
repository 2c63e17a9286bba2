pub mod search;

pub use search::{SearchResponse, SuggestionId, SuggestionKind, SuggestionResult};
