//! The UI seam of the dispatcher.
//!
//! Everything the dispatcher does to the page goes through [`Host`]: blocking
//! prompts, navigation, cookie removal, region updates, and reading the current
//! values of the reservation search controls.

use store::{PickerOptions, Region, SelectList, SelectOption, WindowSelection};

/// Current values of the availability search controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchForm {
    /// Value of `capacity-select`; `-1` stands for "Any".
    pub capacity: String,
    /// State of the wheelchair-lift checkbox.
    pub lift: bool,
    pub window: WindowSelection,
}

pub trait Host {
    /// Blocking yes/no question. `false` aborts the operation.
    fn confirm(&self, message: &str) -> bool;

    /// Blocking notification.
    fn alert(&self, message: &str);

    /// Leave the page for `target`.
    fn navigate(&self, target: &str);

    /// Expire a cookie.
    fn clear_cookie(&self, name: &str, path: &str);

    /// Replace a region's markup.
    fn render(&self, region: Region, html: String);

    /// Replace a select list's options.
    fn render_options(&self, select: SelectList, options: Vec<SelectOption>);

    /// Replace the date and time picker lists.
    fn render_pickers(&self, dates: PickerOptions, times: PickerOptions);

    /// Close whichever "add" modal is open.
    fn close_modal(&self);

    fn search_form(&self) -> SearchForm;

    /// Value of `user-select` in the admin reservation modal.
    fn selected_user(&self) -> String;
}
