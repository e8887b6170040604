use api::{UserForm, VehicleForm};
use dioxus::prelude::*;
use store::SelectList;

use super::select::select_value;
use super::SelectField;
use crate::actions::{use_actions, Action};
use crate::state::use_page_state;

/// Inline form for adding a vehicle.
#[component]
pub fn AddVehicleForm() -> Element {
    let actions = use_actions();
    let page = use_page_state();
    let mut vehicle_id = use_signal(String::new);
    let mut capacity = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut year = use_signal(String::new);
    let mut make = use_signal(String::new);
    let mut class = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut lift = use_signal(|| false);
    let mut ties = use_signal(String::new);
    let mut license = use_signal(String::new);
    let mut vin = use_signal(String::new);

    let handle_submit = move |_| {
        // A select nobody touched still shows its first option.
        let chosen = |value: String, select: SelectList| {
            if value.is_empty() {
                select_value(&page.read(), select)
            } else {
                value
            }
        };
        let form = VehicleForm {
            vehicle_id: vehicle_id(),
            capacity: capacity(),
            location: chosen(location(), SelectList::Location),
            year: year(),
            make: chosen(make(), SelectList::Make),
            class: chosen(class(), SelectList::Class),
            description: description(),
            lift: lift().to_string(),
            ties: ties(),
            license: license(),
            vin: vin(),
        };
        actions.send(Action::AddVehicle(form));
    };

    rsx! {
        div {
            class: "modal-body",
            h2 { "New Vehicle" }
            TextField { id: "vehicle-id", label: "Vehicle #", value: vehicle_id }
            TextField { id: "vehicle-capacity", label: "Capacity", value: capacity }
            SelectField {
                select: SelectList::Location,
                label: "Location",
                on_change: move |value| location.set(value),
            }
            TextField { id: "vehicle-year", label: "Year", value: year }
            SelectField {
                select: SelectList::Make,
                label: "Make",
                on_change: move |value| make.set(value),
            }
            SelectField {
                select: SelectList::Class,
                label: "Class",
                on_change: move |value| class.set(value),
            }
            TextField { id: "vehicle-description", label: "Description", value: description }
            label {
                class: "field-label",
                input {
                    id: "vehicle-lift",
                    r#type: "checkbox",
                    checked: lift(),
                    onchange: move |evt: FormEvent| lift.set(evt.checked()),
                }
                "Wheelchair lift"
            }
            TextField { id: "vehicle-ties", label: "Tie-downs", value: ties }
            TextField { id: "vehicle-license", label: "License", value: license }
            TextField { id: "vehicle-vin", label: "VIN", value: vin }
            button { class: "submit-button", onclick: handle_submit, "Add Vehicle" }
        }
    }
}

/// Inline form for adding a user.
#[component]
pub fn AddUserForm() -> Element {
    let actions = use_actions();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut password_confirm = use_signal(String::new);
    let mut admin = use_signal(|| false);

    let handle_submit = move |_| {
        actions.send(Action::AddUser(UserForm {
            email: email().trim().to_string(),
            password: password(),
            password_confirm: password_confirm(),
            admin: admin(),
        }));
    };

    rsx! {
        div {
            class: "modal-body",
            h2 { "New User" }
            TextField { id: "email", label: "Email", value: email, kind: "email" }
            TextField { id: "password", label: "Password", value: password, kind: "password" }
            TextField { id: "password-confirm", label: "Confirm Password", value: password_confirm, kind: "password" }
            label {
                class: "field-label",
                input {
                    id: "admin-select",
                    r#type: "checkbox",
                    checked: admin(),
                    onchange: move |evt: FormEvent| admin.set(evt.checked()),
                }
                "Administrator"
            }
            button { class: "submit-button", onclick: handle_submit, "Add User" }
        }
    }
}

#[component]
fn TextField(
    id: String,
    label: String,
    value: Signal<String>,
    #[props(default = "text".to_string())] kind: String,
) -> Element {
    let mut value = value;
    rsx! {
        label { r#for: "{id}", class: "field-label", "{label}" }
        input {
            id: "{id}",
            class: "field",
            r#type: "{kind}",
            value: value(),
            oninput: move |evt: FormEvent| value.set(evt.value()),
        }
    }
}
