use std::any::Any;

use leptos::prelude::*;
use tracker_app::{AutocompleteConfig, SearchBox};
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// A mounted search box. Dropping or disposing it unmounts the widget and
/// detaches its document listener.
#[wasm_bindgen]
pub struct AutocompleteHandle {
    mounted: Option<Box<dyn Any>>,
}

#[wasm_bindgen]
impl AutocompleteHandle {
    pub fn dispose(mut self) {
        if self.mounted.take().is_some() {
            log::debug!("search box unmounted");
        }
    }
}

/// Renders a search box into the element with id `host_id`.
///
/// `options` is an optional object with any of the `AutocompleteConfig` fields, e.g.
/// `{ debounceMs: 150, minQueryLen: 1, targetPolicy: "artistOnly" }`.
#[wasm_bindgen(js_name = mountAutocomplete)]
pub fn mount_autocomplete(host_id: &str, options: JsValue) -> Result<AutocompleteHandle, JsValue> {
    let config: AutocompleteConfig = if options.is_undefined() || options.is_null() {
        AutocompleteConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    let host = document()
        .get_element_by_id(host_id)
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {host_id}")))?;

    log::info!("mounting search box into #{host_id}");
    let handle = leptos::mount::mount_to(host, move || view! { <SearchBox config /> });
    Ok(AutocompleteHandle {
        mounted: Some(Box::new(handle)),
    })
}
