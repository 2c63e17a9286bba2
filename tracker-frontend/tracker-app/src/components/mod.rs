pub mod search_box;
pub mod suggestion_item;
