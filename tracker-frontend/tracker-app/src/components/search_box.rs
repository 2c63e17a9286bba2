use crate::{
    api::fetch_suggestions,
    autocomplete::{Autocomplete, DebounceTicket, InputAction},
    components::suggestion_item::*,
    config::AutocompleteConfig,
};
use cfg_if::cfg_if;
use gloo_timers::future::TimeoutFuture;
#[cfg(feature = "csr")]
use leptos::ev::click;
use leptos::{
    html::{Div, Input},
    prelude::*,
    task::spawn_local,
};
#[cfg(feature = "csr")]
use leptos_use::{use_document, use_event_listener};
use std::time::Duration;

/// Waits out the debounce for `ticket`, then runs the search if nothing newer was typed.
fn schedule_search(state: RwSignal<Autocomplete>, ticket: DebounceTicket, delay: Duration) {
    spawn_local(async move {
        TimeoutFuture::new(delay.as_millis().try_into().unwrap_or(u32::MAX)).await;
        // the widget may have been unmounted while we slept
        if !state
            .try_with_untracked(|s| s.is_pending(ticket))
            .unwrap_or(false)
        {
            return;
        }
        let Some(request) = state.try_update(|s| s.debounce_elapsed(ticket)).flatten() else {
            return;
        };
        let response = fetch_suggestions(&request.url).await;
        state.try_update(|s| s.on_response(request.ticket, response));
    });
}

#[cfg(feature = "csr")]
fn is_inside(
    event: &web_sys::MouseEvent,
    input_ref: NodeRef<Input>,
    panel_ref: NodeRef<Div>,
) -> bool {
    use wasm_bindgen::JsCast;

    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
    else {
        return false;
    };
    let in_input = input_ref
        .get_untracked()
        .is_some_and(|input| input.contains(Some(&target)));
    let in_panel = panel_ref
        .get_untracked()
        .is_some_and(|panel| panel.contains(Some(&target)));
    in_input || in_panel
}

#[component]
pub fn SearchBox(#[prop(optional)] config: AutocompleteConfig) -> impl IntoView {
    let input_id = config.input_id.clone();
    let panel_id = config.panel_id.clone();
    let placeholder = config.placeholder.clone();
    let state = RwSignal::new(Autocomplete::new(config));
    let input_ref = NodeRef::<Input>::new();
    let panel_ref = NodeRef::<Div>::new();

    // Scoped to this widget's owner, so unmounting the widget removes the listener.
    cfg_if! {
        if #[cfg(feature = "csr")] {
            let _ = use_event_listener(use_document(), click, move |event| {
                if !is_inside(&event, input_ref, panel_ref) {
                    state.update(Autocomplete::on_outside_click);
                }
            });
        }
    }

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        let action = state.try_update(|s| s.on_input(&value));
        if let Some(InputAction::Schedule { ticket, delay }) = action {
            schedule_search(state, ticket, delay);
        }
    };
    // keystrokes and stray clicks touch the state without changing what is shown
    let visible = Memo::new(move |_| state.with(Autocomplete::is_visible));
    let rows = Memo::new(move |_| state.with(|s| s.rows().to_vec()));
    let display = move || {
        if visible.get() {
            "block"
        } else {
            "none"
        }
    };
    let on_focus = move |ev| {
        let value = event_target_value(&ev);
        state.update(|s| s.on_focus(&value));
    };

    view! {
        <div class="search-box">
            <input
                node_ref=input_ref
                id=input_id
                class="search-input"
                type="text"
                autocomplete="off"
                placeholder=placeholder
                on:input=on_input
                on:focus=on_focus
            />
            <div
                node_ref=panel_ref
                id=panel_id
                class="search-suggestions"
                style:display=display
            >
                <For
                    each=move || rows.get().into_iter().enumerate()
                    key=|(index, row)| (*index, row.clone())
                    children=|(_, row)| view! { <SuggestionItem row /> }
                />
            </div>
        </div>
    }
}
