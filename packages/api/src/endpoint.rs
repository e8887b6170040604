//! Every CGI request the client makes, with its declared parameters.

use std::fmt;

/// HTTP method of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CGI program under the configured root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Program {
    Admin,
    Reservations,
    Metadata,
    Redirect,
    Auth,
}

impl Program {
    pub fn file(self) -> &'static str {
        match self {
            Program::Admin => "admin.cgi",
            Program::Reservations => "reservations.cgi",
            Program::Metadata => "metadata.cgi",
            Program::Redirect => "redirect.cgi",
            Program::Auth => "auth",
        }
    }
}

/// A query parameter an endpoint accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub required: bool,
}

const fn required(name: &'static str) -> ParamSpec {
    ParamSpec { name, required: true }
}

const fn optional(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        required: false,
    }
}

const VEHICLE_FIELDS: &[ParamSpec] = &[
    required("vehicle_id"),
    required("capacity"),
    required("location"),
    required("year"),
    required("make"),
    required("class"),
    required("description"),
    required("lift"),
    required("ties"),
    required("license"),
    required("vin"),
];

const SELECT_FIELDS: &[ParamSpec] = &[required("id")];

const AVAILABLE_FIELDS: &[ParamSpec] = &[
    required("capacity"),
    required("lift"),
    required("begin"),
    required("end"),
];

const ADMIN_RESERVATION_FIELDS: &[ParamSpec] = &[
    required("vehicle_id"),
    required("user_id"),
    required("begin"),
    required("end"),
];

const ADMIN_DELETE_RESERVATION_FIELDS: &[ParamSpec] = &[required("reservation_id")];

const LOCATION_FIELDS: &[ParamSpec] = &[required("vehicle_id"), required("new_location")];

const DELETE_VEHICLE_FIELDS: &[ParamSpec] = &[required("vehicle_id")];

const ADD_USER_FIELDS: &[ParamSpec] = &[required("email"), required("password"), required("admin")];

const APPROVE_USER_FIELDS: &[ParamSpec] = &[required("admin"), required("email")];

const DELETE_USER_FIELDS: &[ParamSpec] = &[required("user_id")];

const SEARCH_FIELDS: &[ParamSpec] = &[
    optional("capacity"),
    required("begin"),
    required("end"),
    required("lift"),
];

const RESERVATION_FIELDS: &[ParamSpec] = &[required("v"), required("begin"), required("end")];

const DELETE_RESERVATION_FIELDS: &[ParamSpec] = &[required("r")];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AdminLoadReservations,
    AdminLoadVehicles,
    AdminLoadUsers,
    AdminLoadSelect,
    AdminLoadAvailable,
    AdminAddReservation,
    AdminDeleteReservation,
    AdminAddVehicle,
    AdminUpdateVehicle,
    AdminUpdateLocation,
    AdminDeleteVehicle,
    AdminAddUser,
    AdminApproveUser,
    AdminDeleteUser,
    LoadReservations,
    Search,
    AddReservation,
    DeleteReservation,
    Metadata,
    Redirect,
    Logout,
}

impl Endpoint {
    pub fn method(self) -> Method {
        use Endpoint::*;
        match self {
            AdminLoadReservations | AdminLoadVehicles | AdminLoadUsers | AdminLoadSelect
            | AdminLoadAvailable | LoadReservations | Search | Metadata | Redirect => Method::Get,
            AdminAddReservation | AdminDeleteReservation | AdminAddVehicle | AdminUpdateVehicle
            | AdminUpdateLocation | AdminDeleteVehicle | AdminAddUser | AdminApproveUser
            | AdminDeleteUser | AddReservation | DeleteReservation | Logout => Method::Post,
        }
    }

    pub fn program(self) -> Program {
        use Endpoint::*;
        match self {
            AdminLoadReservations | AdminLoadVehicles | AdminLoadUsers | AdminLoadSelect
            | AdminLoadAvailable | AdminAddReservation | AdminDeleteReservation
            | AdminAddVehicle | AdminUpdateVehicle | AdminUpdateLocation | AdminDeleteVehicle
            | AdminAddUser | AdminApproveUser | AdminDeleteUser => Program::Admin,
            LoadReservations | Search | AddReservation | DeleteReservation => {
                Program::Reservations
            }
            Metadata => Program::Metadata,
            Redirect => Program::Redirect,
            Logout => Program::Auth,
        }
    }

    /// Value of the leading `action=` parameter.
    pub fn action(self) -> Option<&'static str> {
        use Endpoint::*;
        let action = match self {
            AdminLoadReservations => "load_reservations",
            AdminLoadVehicles => "load_vehicles",
            AdminLoadUsers => "load_users",
            AdminLoadSelect => "load_select",
            AdminLoadAvailable => "load_available",
            AdminAddReservation => "add_reservation",
            AdminDeleteReservation => "delete_reservation",
            AdminAddVehicle => "add_vehicle",
            AdminUpdateVehicle => "update_vehicle",
            AdminUpdateLocation => "update_location",
            AdminDeleteVehicle => "delete_vehicle",
            AdminAddUser => "add_user",
            AdminApproveUser => "approve_user",
            AdminDeleteUser => "delete_user",
            Search => "search",
            AddReservation => "add",
            DeleteReservation => "delete",
            LoadReservations | Metadata | Redirect | Logout => return None,
        };
        Some(action)
    }

    /// Bare query word sent instead of key/value pairs (`auth?logout`).
    pub fn flag(self) -> Option<&'static str> {
        match self {
            Endpoint::Logout => Some("logout"),
            _ => None,
        }
    }

    /// Parameters the endpoint accepts besides `action` and `random`.
    pub fn params(self) -> &'static [ParamSpec] {
        use Endpoint::*;
        match self {
            AdminLoadReservations | AdminLoadVehicles | AdminLoadUsers | LoadReservations
            | Redirect | Logout => &[],
            AdminLoadSelect | Metadata => SELECT_FIELDS,
            AdminLoadAvailable => AVAILABLE_FIELDS,
            AdminAddReservation => ADMIN_RESERVATION_FIELDS,
            AdminDeleteReservation => ADMIN_DELETE_RESERVATION_FIELDS,
            AdminAddVehicle | AdminUpdateVehicle => VEHICLE_FIELDS,
            AdminUpdateLocation => LOCATION_FIELDS,
            AdminDeleteVehicle => DELETE_VEHICLE_FIELDS,
            AdminAddUser => ADD_USER_FIELDS,
            AdminApproveUser => APPROVE_USER_FIELDS,
            AdminDeleteUser => DELETE_USER_FIELDS,
            Search => SEARCH_FIELDS,
            AddReservation => RESERVATION_FIELDS,
            DeleteReservation => DELETE_RESERVATION_FIELDS,
        }
    }

    pub fn param(self, name: &str) -> Option<&'static ParamSpec> {
        self.params().iter().find(|p| p.name == name)
    }
}
