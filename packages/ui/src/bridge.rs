//! Global functions called by the inline handlers of server fragments.
//!
//! The CGI programs render buttons such as `onclick="deleteUserAdmin(7)"`.
//! [`install`] defines each name in [`store::command::FRAGMENT_FUNCTIONS`] on
//! `window` and forwards the call to the action coroutine.

use dioxus::prelude::*;

use crate::actions::Action;

/// Publish the fragment functions on `window`. Safe to call more than once;
/// later calls replace the earlier functions.
#[cfg(target_arch = "wasm32")]
pub fn install(actions: Coroutine<Action>) {
    use store::command::{Command, FRAGMENT_FUNCTIONS, ROW_SCRAPING_FUNCTION};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        tracing::error!("No window to install fragment functions on");
        return;
    };

    for &name in FRAGMENT_FUNCTIONS {
        let handler = Closure::<dyn Fn(JsValue)>::new(move |argument: JsValue| {
            let argument = argument_text(&argument);
            let command = if name == ROW_SCRAPING_FUNCTION {
                row_cells(&argument).map(Command::update_vehicle)
            } else {
                Command::from_call(name, &argument)
            };
            match command {
                Some(command) => actions.send(Action::Fragment(command)),
                None => tracing::warn!("Ignoring {}({:?})", name, argument),
            }
        });
        if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(name), handler.as_ref()) {
            tracing::error!("Failed to install {}: {:?}", name, e);
        }
        // The function lives as long as the page.
        handler.forget();
    }
    tracing::debug!("Installed {} fragment functions", FRAGMENT_FUNCTIONS.len());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install(_actions: Coroutine<Action>) {}

/// Text of a handler argument; fragments pass record ids as numbers and
/// emails as strings.
#[cfg(target_arch = "wasm32")]
fn argument_text(argument: &wasm_bindgen::JsValue) -> String {
    argument
        .as_string()
        .or_else(|| argument.as_f64().map(|n| n.to_string()))
        .unwrap_or_default()
}

/// Inner HTML of every cell of the table row with the given element id.
#[cfg(target_arch = "wasm32")]
fn row_cells(row_id: &str) -> Option<Vec<String>> {
    let row = web_sys::window()?.document()?.get_element_by_id(row_id)?;
    let cells = row.get_elements_by_tag_name("td");
    Some(
        (0..cells.length())
            .filter_map(|i| cells.item(i))
            .map(|cell| cell.inner_html())
            .collect(),
    )
}
