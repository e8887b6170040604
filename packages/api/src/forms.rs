//! Values collected from the admin forms and table rows.

use store::ValidationError;

/// The eleven vehicle attributes, in the order the vehicle table lists them.
pub const VEHICLE_COLUMNS: [&str; 11] = [
    "vehicle_id",
    "capacity",
    "location",
    "year",
    "make",
    "class",
    "description",
    "lift",
    "ties",
    "license",
    "vin",
];

/// A vehicle as sent to `add_vehicle` and `update_vehicle`.
///
/// Values are passed through untouched; the server validates them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VehicleForm {
    pub vehicle_id: String,
    pub capacity: String,
    pub location: String,
    pub year: String,
    pub make: String,
    pub class: String,
    pub description: String,
    /// `true`/`false` from the add form, the cell text when editing a row.
    pub lift: String,
    pub ties: String,
    pub license: String,
    pub vin: String,
}

impl VehicleForm {
    /// Read a vehicle from the cells of an edited table row.
    ///
    /// Cells past the eleventh (action buttons) are ignored.
    pub fn from_row_cells(cells: &[String]) -> Result<Self, ValidationError> {
        if cells.len() < VEHICLE_COLUMNS.len() {
            return Err(ValidationError::RowTooShort {
                expected: VEHICLE_COLUMNS.len(),
                found: cells.len(),
            });
        }
        let cell = |i: usize| cells[i].trim().to_string();
        Ok(Self {
            vehicle_id: cell(0),
            capacity: cell(1),
            location: cell(2),
            year: cell(3),
            make: cell(4),
            class: cell(5),
            description: cell(6),
            lift: cell(7),
            ties: cell(8),
            license: cell(9),
            vin: cell(10),
        })
    }

    /// Parameter name and value for every column, in table order.
    pub fn pairs(&self) -> [(&'static str, &str); 11] {
        let values = [
            &self.vehicle_id,
            &self.capacity,
            &self.location,
            &self.year,
            &self.make,
            &self.class,
            &self.description,
            &self.lift,
            &self.ties,
            &self.license,
            &self.vin,
        ];
        let mut pairs = [("", ""); 11];
        for (slot, (name, value)) in pairs.iter_mut().zip(VEHICLE_COLUMNS.into_iter().zip(values)) {
            *slot = (name, value.as_str());
        }
        pairs
    }
}

/// The "add user" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub admin: bool,
}

impl UserForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.password != self.password_confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}
