mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod region;
pub use region::FragmentRegion;

mod select;
pub use select::{SearchControls, SelectField};

mod forms;
pub use forms::{AddUserForm, AddVehicleForm};

mod admin;
pub use admin::AdminView;

mod reservations;
pub use reservations::ReservationsView;
