//! Actions triggered from inside server fragments.
//!
//! The tables the CGI programs render carry inline handlers such as
//! `onclick="deleteVehicleAdmin(12)"`. The client publishes a global function
//! for every name in [`FRAGMENT_FUNCTIONS`] and turns each call into a
//! [`Command`].

/// Global function names server fragments call.
pub const FRAGMENT_FUNCTIONS: &[&str] = &[
    "addReservationAdmin",
    "deleteReservationAdmin",
    "deleteVehicleAdmin",
    "setMaintenanceAdmin",
    "unsetMaintenanceAdmin",
    "updateVehicleAdmin",
    "deleteUserAdmin",
    "approveUserAdmin",
    "addReservation",
    "deleteReservation",
];

/// Function whose argument is a table row id rather than a record id.
pub const ROW_SCRAPING_FUNCTION: &str = "updateVehicleAdmin";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    AddReservationAdmin { vehicle_id: String },
    DeleteReservationAdmin { reservation_id: String },
    DeleteVehicle { vehicle_id: String },
    SetMaintenance { vehicle_id: String },
    UnsetMaintenance { vehicle_id: String },
    /// Cell texts of the edited vehicle row.
    UpdateVehicle { cells: Vec<String> },
    DeleteUser { user_id: String },
    ApproveUser { email: String },
    AddReservation { vehicle_id: String },
    DeleteReservation { reservation_id: String },
}

impl Command {
    /// Build the command for a call `name(argument)`.
    ///
    /// Returns `None` for unknown names and for [`ROW_SCRAPING_FUNCTION`], which
    /// needs the row's cells; see [`Command::update_vehicle`].
    pub fn from_call(name: &str, argument: &str) -> Option<Self> {
        let arg = argument.trim().to_string();
        let command = match name {
            "addReservationAdmin" => Command::AddReservationAdmin { vehicle_id: arg },
            "deleteReservationAdmin" => Command::DeleteReservationAdmin { reservation_id: arg },
            "deleteVehicleAdmin" => Command::DeleteVehicle { vehicle_id: arg },
            "setMaintenanceAdmin" => Command::SetMaintenance { vehicle_id: arg },
            "unsetMaintenanceAdmin" => Command::UnsetMaintenance { vehicle_id: arg },
            "deleteUserAdmin" => Command::DeleteUser { user_id: arg },
            "approveUserAdmin" => Command::ApproveUser { email: arg },
            "addReservation" => Command::AddReservation { vehicle_id: arg },
            "deleteReservation" => Command::DeleteReservation { reservation_id: arg },
            _ => return None,
        };
        Some(command)
    }

    pub fn update_vehicle(cells: Vec<String>) -> Self {
        Command::UpdateVehicle { cells }
    }
}
