//! Everything a page asks the dispatcher to do.
//!
//! Components and fragment handlers send an [`Action`] to the coroutine started
//! by [`ActionRunner`]; each action is spawned as its own task, so a slow
//! request never holds up the next click.

use api::{UserForm, VehicleForm};
use dioxus::prelude::*;
use futures::StreamExt;
use store::{Command, Modal, SelectList};

use crate::dispatcher::make_dispatcher;
use crate::state::{use_config, use_page_state};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    LoadReservationsAdmin,
    LoadVehiclesAdmin,
    LoadUsersAdmin,
    LoadAvailableAdmin,
    PopulateModal(Modal),
    AddVehicle(VehicleForm),
    AddUser(UserForm),
    LoadReservations,
    SearchAvailable,
    PopulateAddModal,
    FillSelect(SelectList),
    Logout,
    /// A call made from inside a server fragment.
    Fragment(Command),
}

/// Handle for sending actions.
pub fn use_actions() -> Coroutine<Action> {
    use_coroutine_handle::<Action>()
}

/// Starts the action coroutine for its children.
#[component]
pub fn ActionRunner(children: Element) -> Element {
    let page = use_page_state();
    let config = use_config();

    use_coroutine(move |mut rx: UnboundedReceiver<Action>| {
        let config = config.clone();
        async move {
            while let Some(action) = rx.next().await {
                let config = config.clone();
                spawn(async move {
                    let dispatcher = match make_dispatcher(config, page) {
                        Ok(dispatcher) => dispatcher,
                        Err(e) => {
                            tracing::error!("Failed to create dispatcher: {}", e);
                            return;
                        }
                    };
                    match action {
                        Action::LoadReservationsAdmin => dispatcher.load_reservations_admin().await,
                        Action::LoadVehiclesAdmin => dispatcher.load_vehicles_admin().await,
                        Action::LoadUsersAdmin => dispatcher.load_users_admin().await,
                        Action::LoadAvailableAdmin => dispatcher.load_available_admin().await,
                        Action::PopulateModal(modal) => dispatcher.populate_modal(modal).await,
                        Action::AddVehicle(form) => dispatcher.add_vehicle_admin(&form).await,
                        Action::AddUser(form) => dispatcher.add_user_admin(&form).await,
                        Action::LoadReservations => dispatcher.load_reservations().await,
                        Action::SearchAvailable => dispatcher.search_available().await,
                        Action::PopulateAddModal => dispatcher.populate_add_modal().await,
                        Action::FillSelect(select) => dispatcher.fill_select(select).await,
                        Action::Logout => dispatcher.logout().await,
                        Action::Fragment(command) => dispatcher.run(command).await,
                    }
                });
            }
        }
    });

    rsx! {
        {children}
    }
}
