//! Page state shared by every component and by the browser host.

use std::collections::HashMap;

use api::SearchForm;
use dioxus::prelude::*;
use store::options::initial_value;
use store::{ClientConfig, PickerOptions, Region, SelectList, SelectOption, ViewState};

/// Everything the page shows that is not static markup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    /// Admin panels and modals.
    pub view: ViewState,
    /// The user page's single "add" modal.
    pub add_modal_open: bool,
    /// Latest fragment rendered into each region.
    pub regions: HashMap<Region, String>,
    pub selects: HashMap<SelectList, Vec<SelectOption>>,
    pub dates: PickerOptions,
    pub times: PickerOptions,
    /// Current values of the search controls.
    pub search: SearchForm,
    /// Current value of `user-select`.
    pub selected_user: String,
}

impl PageState {
    pub fn region(&self, region: Region) -> &str {
        self.regions.get(&region).map(String::as_str).unwrap_or("")
    }

    pub fn options(&self, select: SelectList) -> &[SelectOption] {
        self.selects.get(&select).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Store a select list's options and move its value to the option the
    /// list starts on, as a browser does when options are replaced.
    pub fn set_options(&mut self, select: SelectList, options: Vec<SelectOption>) {
        let value = initial_value(&options).unwrap_or_default().to_string();
        match select {
            SelectList::Capacity => self.search.capacity = value,
            SelectList::User => self.selected_user = value,
            SelectList::Location | SelectList::Make | SelectList::Class => {}
        }
        self.selects.insert(select, options);
    }

    pub fn set_pickers(&mut self, dates: PickerOptions, times: PickerOptions) {
        let window = &mut self.search.window;
        window.start_date = initial_value(&dates.start).unwrap_or_default().to_string();
        window.end_date = initial_value(&dates.end).unwrap_or_default().to_string();
        window.start_time = initial_value(&times.start).unwrap_or_default().to_string();
        window.end_time = initial_value(&times.end).unwrap_or_default().to_string();
        self.dates = dates;
        self.times = times;
    }

    pub fn close_modals(&mut self) {
        self.view = self.view.close_modal();
        self.add_modal_open = false;
    }
}

/// The current page state.
pub fn use_page_state() -> Signal<PageState> {
    use_context::<Signal<PageState>>()
}

/// The configuration the app was built with.
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provides [`PageState`] and the client configuration to its children.
#[component]
pub fn PageProvider(config: ClientConfig, children: Element) -> Element {
    let page = use_signal(PageState::default);
    use_context_provider(|| page);
    use_context_provider(|| config);

    rsx! {
        {children}
    }
}
