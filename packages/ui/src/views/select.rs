//! Select lists fed by the server and the reservation pickers.

use dioxus::prelude::*;
use store::options::initial_value;
use store::{SelectList, SelectOption};

use crate::state::{use_page_state, PageState};

/// A select list whose options come from `load_select` or `metadata.cgi`.
///
/// `on_change` receives the chosen value; lists with a page-level value
/// (capacity, user) also store it in the page state.
#[component]
pub fn SelectField(
    select: SelectList,
    label: String,
    #[props(default)] value: Option<String>,
    #[props(default)] on_change: EventHandler<String>,
) -> Element {
    let mut page = use_page_state();
    let options = page.read().options(select).to_vec();
    let current = value.unwrap_or_else(|| select_value(&page.read(), select));

    rsx! {
        label { r#for: select.id(), class: "field-label", "{label}" }
        select {
            id: select.id(),
            class: "field",
            value: "{current}",
            onchange: move |evt: FormEvent| {
                let value = evt.value();
                match select {
                    SelectList::Capacity => page.write().search.capacity = value.clone(),
                    SelectList::User => page.write().selected_user = value.clone(),
                    SelectList::Location | SelectList::Make | SelectList::Class => {}
                }
                on_change.call(value);
            },
            for option in options {
                OptionItem { key: "{option.value}", option: option.clone(), current: current.clone() }
            }
        }
    }
}

#[component]
fn OptionItem(option: SelectOption, current: String) -> Element {
    rsx! {
        option {
            value: "{option.value}",
            selected: option.value == current,
            "{option.label}"
        }
    }
}

/// Value a select list currently shows.
pub(crate) fn select_value(page: &PageState, select: SelectList) -> String {
    match select {
        SelectList::Capacity => page.search.capacity.clone(),
        SelectList::User => page.selected_user.clone(),
        SelectList::Location | SelectList::Make | SelectList::Class => {
            initial_value(page.options(select)).unwrap_or_default().to_string()
        }
    }
}

/// Which of the four picker selects a [`PickerSelect`] edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Picker {
    StartDate,
    StartTime,
    EndDate,
    EndTime,
}

impl Picker {
    fn id(self) -> &'static str {
        match self {
            Picker::StartDate => "start-date-select",
            Picker::StartTime => "start-time-select",
            Picker::EndDate => "end-date-select",
            Picker::EndTime => "end-time-select",
        }
    }
}

/// Start/end date and time selects, the capacity filter and the lift checkbox.
///
/// Every change re-runs the availability search through `on_change`.
#[component]
pub fn SearchControls(on_change: EventHandler<()>) -> Element {
    let mut page = use_page_state();

    rsx! {
        div {
            class: "search-controls",
            div {
                class: "picker-row",
                span { class: "field-label", "Start" }
                PickerSelect { picker: Picker::StartDate, on_change }
                PickerSelect { picker: Picker::StartTime, on_change }
            }
            div {
                class: "picker-row",
                span { class: "field-label", "End" }
                PickerSelect { picker: Picker::EndDate, on_change }
                PickerSelect { picker: Picker::EndTime, on_change }
            }
            div {
                class: "picker-row",
                SelectField {
                    select: SelectList::Capacity,
                    label: "Capacity",
                    on_change: move |_| on_change.call(()),
                }
                label {
                    class: "field-label",
                    input {
                        id: "lift-select",
                        r#type: "checkbox",
                        checked: page.read().search.lift,
                        onchange: move |evt: FormEvent| {
                            page.write().search.lift = evt.checked();
                            on_change.call(());
                        },
                    }
                    "Wheelchair lift"
                }
            }
        }
    }
}

#[component]
fn PickerSelect(picker: Picker, on_change: EventHandler<()>) -> Element {
    let mut page = use_page_state();
    let (options, current) = {
        let state = page.read();
        let window = &state.search.window;
        match picker {
            Picker::StartDate => (state.dates.start.clone(), window.start_date.clone()),
            Picker::EndDate => (state.dates.end.clone(), window.end_date.clone()),
            Picker::StartTime => (state.times.start.clone(), window.start_time.clone()),
            Picker::EndTime => (state.times.end.clone(), window.end_time.clone()),
        }
    };

    rsx! {
        select {
            id: picker.id(),
            class: "field",
            value: "{current}",
            onchange: move |evt: FormEvent| {
                let value = evt.value();
                {
                    let mut state = page.write();
                    let window = &mut state.search.window;
                    match picker {
                        Picker::StartDate => window.start_date = value,
                        Picker::EndDate => window.end_date = value,
                        Picker::StartTime => window.start_time = value,
                        Picker::EndTime => window.end_time = value,
                    }
                }
                on_change.call(());
            },
            for option in options {
                OptionItem { key: "{option.value}", option: option.clone(), current: current.clone() }
            }
        }
    }
}
