use dioxus::prelude::*;
use store::Region;

use crate::state::use_page_state;

/// A page area showing the latest server fragment rendered into `region`.
#[component]
pub fn FragmentRegion(region: Region, #[props(default)] hidden: bool) -> Element {
    let page = use_page_state();
    let html = page.read().region(region).to_string();

    rsx! {
        div {
            id: region.id(),
            class: "region",
            style: if hidden { "visibility: hidden" } else { "visibility: visible" },
            dangerous_inner_html: "{html}",
        }
    }
}
