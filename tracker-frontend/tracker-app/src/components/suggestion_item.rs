use crate::autocomplete::SuggestionRow;
use leptos::prelude::*;

/// A single row in the suggestions panel. Rows with a detail page are links,
/// everything else is shown but goes nowhere.
#[component]
pub fn SuggestionItem(row: SuggestionRow) -> impl IntoView {
    let SuggestionRow {
        kind,
        context,
        text,
        target,
    } = row;
    let label = view! {
        <span class="suggestion-type">{kind}</span>
        {context.map(|context| view! { <span class="suggestion-context">{context}</span> })}
        <span class="suggestion-text">{text}</span>
    };
    match target {
        Some(href) => view! { <a class="suggestion-item" href=href>{label}</a> }.into_any(),
        None => view! { <div class="suggestion-item">{label}</div> }.into_any(),
    }
}
