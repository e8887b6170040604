//! Page areas whose content comes from the server.

use std::fmt;

/// A table region replaced wholesale by a server fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Reservations,
    Vehicles,
    Users,
    Available,
}

impl Region {
    pub fn id(self) -> &'static str {
        match self {
            Region::Reservations => "reservations",
            Region::Vehicles => "vehicles",
            Region::Users => "users",
            Region::Available => "available",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A select list whose options come from the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectList {
    User,
    Location,
    Make,
    Class,
    Capacity,
}

impl SelectList {
    /// Element id, which is also the `id` parameter the server expects.
    pub fn id(self) -> &'static str {
        match self {
            SelectList::User => "user-select",
            SelectList::Location => "location-select",
            SelectList::Make => "make-select",
            SelectList::Class => "class-select",
            SelectList::Capacity => "capacity-select",
        }
    }
}

impl fmt::Display for SelectList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
