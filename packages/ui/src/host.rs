//! [`api::Host`] backed by the page state and the browser window.
//!
//! Region and select updates only write the [`PageState`] signal; the
//! components re-render from it. Prompts, navigation and cookies go straight
//! to `web_sys`. Outside the browser those calls are logged and confirmations
//! are declined.

use api::{Host, SearchForm};
use dioxus::prelude::*;
use store::{PickerOptions, Region, SelectList, SelectOption};

use crate::state::PageState;

#[derive(Clone, Copy)]
pub struct WebHost {
    page: Signal<PageState>,
}

impl WebHost {
    pub fn new(page: Signal<PageState>) -> Self {
        Self { page }
    }
}

impl Host for WebHost {
    fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|window| window.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::warn!("No browser to confirm {:?}, declining", message);
            false
        }
    }

    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!("Alert: {}", message);
    }

    fn navigate(&self, target: &str) {
        tracing::info!("Navigating to {}", target);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().assign(target) {
                    tracing::error!("Failed to navigate to {}: {:?}", target, e);
                }
            }
        }
    }

    fn clear_cookie(&self, name: &str, path: &str) {
        let cookie = api::session::expired_cookie(name, path);
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok());
            if let Some(document) = document {
                if let Err(e) = document.set_cookie(&cookie) {
                    tracing::error!("Failed to clear cookie {}: {:?}", name, e);
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!("Cookie: {}", cookie);
    }

    fn render(&self, region: Region, html: String) {
        let mut page = self.page;
        page.write().regions.insert(region, html);
    }

    fn render_options(&self, select: SelectList, options: Vec<SelectOption>) {
        let mut page = self.page;
        page.write().set_options(select, options);
    }

    fn render_pickers(&self, dates: PickerOptions, times: PickerOptions) {
        let mut page = self.page;
        page.write().set_pickers(dates, times);
    }

    fn close_modal(&self) {
        let mut page = self.page;
        page.write().close_modals();
    }

    fn search_form(&self) -> SearchForm {
        self.page.read().search.clone()
    }

    fn selected_user(&self) -> String {
        self.page.read().selected_user.clone()
    }
}
