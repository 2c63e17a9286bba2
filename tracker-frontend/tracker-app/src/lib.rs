pub mod api;
pub mod autocomplete;
pub mod components;
pub mod config;
pub mod error;
pub mod location_text;
pub mod navigation;

pub use autocomplete::Autocomplete;
pub use components::search_box::SearchBox;
pub use config::{AutocompleteConfig, TargetPolicy};
