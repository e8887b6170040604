//! Row schemas for the tables `reservations.cgi` renders.
//!
//! The server emits plain `<td>` cells; their meaning depends only on their
//! position within a row. A [`RowSchema`] names every position and tags it with a
//! [`FieldKind`] so the formatter never works with raw offsets.

/// How a cell's text is rewritten for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Record number, shown with a leading `#`.
    Id,
    /// `YYYY-MM-DD HH:MM:SS`, shown as time and date on two lines.
    Timestamp,
    /// `"1"`/`"0"`, shown as `Yes`/`No`.
    Boolean,
    /// Left as sent.
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Ordered field list of one table row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl RowSchema {
    /// Number of cells per row.
    pub fn stride(&self) -> usize {
        self.fields.len()
    }

    /// Field at a position of the flattened cell sequence.
    pub fn field_at(&self, index: usize) -> Option<&FieldSpec> {
        if self.fields.is_empty() {
            return None;
        }
        self.fields.get(index % self.stride())
    }
}

/// A row of the user's reservation table.
pub const RESERVATION_ROW: RowSchema = RowSchema {
    name: "reservation",
    fields: &[
        FieldSpec::new("reservation_id", FieldKind::Id),
        FieldSpec::new("begin", FieldKind::Timestamp),
        FieldSpec::new("end", FieldKind::Timestamp),
        FieldSpec::new("vehicle_id", FieldKind::Text),
        FieldSpec::new("capacity", FieldKind::Text),
        FieldSpec::new("lift", FieldKind::Boolean),
        FieldSpec::new("location", FieldKind::Text),
        FieldSpec::new("actions", FieldKind::Text),
    ],
};

/// A row of the availability search results.
pub const AVAILABLE_ROW: RowSchema = RowSchema {
    name: "available",
    fields: &[
        FieldSpec::new("vehicle_id", FieldKind::Text),
        FieldSpec::new("capacity", FieldKind::Text),
        FieldSpec::new("make", FieldKind::Text),
        FieldSpec::new("class", FieldKind::Text),
        FieldSpec::new("lift", FieldKind::Boolean),
        FieldSpec::new("ties", FieldKind::Text),
        FieldSpec::new("actions", FieldKind::Text),
    ],
};
