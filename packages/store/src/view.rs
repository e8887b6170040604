//! Panel and modal visibility for the admin page.
//!
//! [`ViewState`] is a small `Copy` value. The admin page keeps it in a signal and
//! replaces it with the result of [`ViewState::show_panel`] or
//! [`ViewState::toggle_modal`]; components derive visibility, button classes and
//! the CSV link from it.

use std::fmt;

/// One of the three content panels on the admin page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    Reservations,
    Vehicles,
    Users,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Reservations, Panel::Vehicles, Panel::Users];

    /// Element id of the panel, also used as the CSV export selector.
    pub fn id(self) -> &'static str {
        match self {
            Panel::Reservations => "reservations",
            Panel::Vehicles => "vehicles",
            Panel::Users => "users",
        }
    }

    pub fn button_id(self) -> &'static str {
        match self {
            Panel::Reservations => "reservations-button",
            Panel::Vehicles => "vehicles-button",
            Panel::Users => "users-button",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::Reservations => "Reservations",
            Panel::Vehicles => "Vehicles",
            Panel::Users => "Users",
        }
    }

    /// The "add" modal opened from this panel.
    pub fn modal(self) -> Modal {
        match self {
            Panel::Reservations => Modal::AddReservation,
            Panel::Vehicles => Modal::AddVehicle,
            Panel::Users => Modal::AddUser,
        }
    }

    /// Whether the panel's table can be downloaded as CSV.
    pub fn exportable(self) -> bool {
        matches!(self, Panel::Reservations | Panel::Vehicles)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The "add" dialogs, one per panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modal {
    AddReservation,
    AddVehicle,
    AddUser,
}

impl Modal {
    pub fn id(self) -> &'static str {
        match self {
            Modal::AddReservation => "add-reservations",
            Modal::AddVehicle => "add-vehicles",
            Modal::AddUser => "add-users",
        }
    }
}

pub const SELECTED_BUTTON: &str = "selected-button";
pub const UNSELECTED_BUTTON: &str = "unselected-button";

/// Visibility state of the admin page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    visible: Option<Panel>,
    modal: Option<Modal>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide every other panel and show `panel`.
    pub fn show_panel(self, panel: Panel) -> Self {
        Self {
            visible: Some(panel),
            ..self
        }
    }

    /// Open the visible panel's modal, or close the open one.
    ///
    /// Returns the new state and the modal that was just opened, if any. With no
    /// panel visible the state is returned unchanged.
    pub fn toggle_modal(self) -> (Self, Option<Modal>) {
        let Some(panel) = self.visible else {
            return (self, None);
        };
        if self.modal.is_some() {
            (Self { modal: None, ..self }, None)
        } else {
            let modal = panel.modal();
            (
                Self {
                    modal: Some(modal),
                    ..self
                },
                Some(modal),
            )
        }
    }

    /// Close the open modal, if any.
    pub fn close_modal(self) -> Self {
        Self { modal: None, ..self }
    }

    pub fn visible_panel(&self) -> Option<Panel> {
        self.visible
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible == Some(panel)
    }

    pub fn open_modal(&self) -> Option<Modal> {
        self.modal
    }

    /// CSS class of a sidebar button.
    pub fn button_class(&self, panel: Panel) -> &'static str {
        if self.is_visible(panel) {
            SELECTED_BUTTON
        } else {
            UNSELECTED_BUTTON
        }
    }

    /// Target of the CSV download control, `None` when the control is hidden.
    pub fn download_href(&self, cgi_root: &str) -> Option<String> {
        self.visible
            .filter(|panel| panel.exportable())
            .map(|panel| format!("{}/csv?{}", cgi_root.trim_end_matches('/'), panel.id()))
    }
}
