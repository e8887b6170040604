//! The signed-in user's page: their reservations and the "add" modal.

use dioxus::prelude::*;
use store::Region;

use super::{FragmentRegion, ModalOverlay, SearchControls};
use crate::actions::{use_actions, Action};
use crate::bridge;
use crate::state::use_page_state;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn ReservationsView() -> Element {
    let actions = use_actions();
    let mut page = use_page_state();

    use_hook(move || {
        bridge::install(actions);
        actions.send(Action::LoadReservations);
    });

    let modal_open = page.read().add_modal_open;

    let toggle_add_modal = move |_| {
        let open = !page.read().add_modal_open;
        page.write().add_modal_open = open;
        if open {
            actions.send(Action::PopulateAddModal);
        }
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "user-layout",
            header {
                class: "user-header",
                h1 { "My Reservations" }
                button { id: "add-button", class: "selected-button", onclick: toggle_add_modal, "New Reservation" }
                button {
                    id: "logout-button",
                    class: "unselected-button",
                    onclick: move |_| actions.send(Action::Logout),
                    "Log out"
                }
            }
            FragmentRegion { region: Region::Reservations }
        }

        if modal_open {
            ModalOverlay {
                id: "add-modal",
                on_close: move |_| page.write().add_modal_open = false,
                div {
                    class: "modal-body",
                    h2 { "New Reservation" }
                    SearchControls { on_change: move |_| actions.send(Action::SearchAvailable) }
                    FragmentRegion { region: Region::Available }
                }
            }
        }
    }
}
