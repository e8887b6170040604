//! The administration page: sidebar, the three panels and their "add" modals.

use dioxus::prelude::*;
use store::{Modal, Panel, Region};

use super::forms::{AddUserForm, AddVehicleForm};
use super::{FragmentRegion, ModalOverlay, SearchControls, SelectField};
use crate::actions::{use_actions, Action};
use crate::bridge;
use crate::state::{use_config, use_page_state};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Full admin page. Loads all three tables on mount.
#[component]
pub fn AdminView() -> Element {
    let actions = use_actions();
    let page = use_page_state();

    use_hook(move || {
        bridge::install(actions);
        actions.send(Action::LoadReservationsAdmin);
        actions.send(Action::LoadVehiclesAdmin);
        actions.send(Action::LoadUsersAdmin);
    });

    let view = page.read().view;

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "admin-layout",
            AdminSidebar {}
            main {
                class: "admin-content",
                for panel in Panel::ALL {
                    FragmentRegion {
                        key: "{panel.id()}",
                        region: panel_region(panel),
                        hidden: !view.is_visible(panel),
                    }
                }
            }
        }

        if let Some(modal) = view.open_modal() {
            AdminModal { modal }
        }
    }
}

fn panel_region(panel: Panel) -> Region {
    match panel {
        Panel::Reservations => Region::Reservations,
        Panel::Vehicles => Region::Vehicles,
        Panel::Users => Region::Users,
    }
}

/// Panel buttons, the "add" toggle, CSV download and logout.
#[component]
fn AdminSidebar() -> Element {
    let mut page = use_page_state();
    let actions = use_actions();
    let config = use_config();

    let view = page.read().view;
    let download = view.download_href(&config.endpoints.cgi_root);
    let download_style = if download.is_some() {
        "visibility: visible"
    } else {
        "visibility: hidden"
    };
    let download_href = download.unwrap_or_default();

    let toggle = move |_| {
        let (next, opened) = page.read().view.toggle_modal();
        page.write().view = next;
        if let Some(modal) = opened {
            actions.send(Action::PopulateModal(modal));
        }
    };

    rsx! {
        nav {
            class: "sidebar",
            for panel in Panel::ALL {
                button {
                    key: "{panel.button_id()}",
                    id: panel.button_id(),
                    class: view.button_class(panel),
                    onclick: move |_| {
                        let next = page.read().view.show_panel(panel);
                        page.write().view = next;
                    },
                    "{panel.title()}"
                }
            }
            button {
                id: "add-button",
                class: "unselected-button",
                disabled: view.visible_panel().is_none(),
                onclick: toggle,
                "Add"
            }
            a {
                id: "download-button",
                class: "unselected-button",
                style: download_style,
                href: download_href,
                "Download CSV"
            }
            button {
                id: "logout-button",
                class: "unselected-button",
                onclick: move |_| actions.send(Action::Logout),
                "Log out"
            }
        }
    }
}

#[component]
fn AdminModal(modal: Modal) -> Element {
    let mut page = use_page_state();
    let close = move |_| page.write().close_modals();

    rsx! {
        ModalOverlay {
            id: modal.id().to_string(),
            on_close: close,
            {match modal {
                Modal::AddReservation => rsx! { AddReservationForm {} },
                Modal::AddVehicle => rsx! { AddVehicleForm {} },
                Modal::AddUser => rsx! { AddUserForm {} },
            }}
        }
    }
}

/// Pick a user and a window; the available vehicles below carry the buttons
/// that make the reservation.
#[component]
fn AddReservationForm() -> Element {
    let actions = use_actions();

    rsx! {
        div {
            class: "modal-body",
            h2 { "New Reservation" }
            SelectField {
                select: store::SelectList::User,
                label: "User",
            }
            SearchControls { on_change: move |_| actions.send(Action::LoadAvailableAdmin) }
            FragmentRegion { region: Region::Available }
        }
    }
}
