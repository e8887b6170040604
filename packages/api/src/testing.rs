//! In-memory [`Transport`] and [`Host`] for dispatcher tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use store::{PickerOptions, Region, SelectList, SelectOption};

use crate::endpoint::Method;
use crate::error::ApiError;
use crate::host::{Host, SearchForm};
use crate::transport::{RawResponse, Transport};

/// Answers requests from a queue of canned responses. The last response is
/// repeated once the queue is down to one.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<RawResponse, ()>>>,
    calls: RefCell<Vec<(Method, String)>>,
}

impl MockTransport {
    pub fn ok(body: &str) -> Self {
        Self::default().respond(200, body)
    }

    pub fn status(status: u16) -> Self {
        Self::default().respond(status, "")
    }

    /// Every request fails before a status arrives.
    pub fn failing() -> Self {
        let transport = Self::default();
        transport.responses.borrow_mut().push_back(Err(()));
        transport
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn calls(&self) -> Vec<(Method, String)> {
        self.calls.borrow().clone()
    }

    pub fn targets(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(_, target)| target.clone()).collect()
    }

    fn next(&self) -> Option<Result<RawResponse, ()>> {
        let mut responses = self.responses.borrow_mut();
        if responses.len() > 1 {
            responses.pop_front()
        } else {
            responses.front().cloned()
        }
    }
}

impl Transport for MockTransport {
    async fn send(&self, method: Method, path_and_query: &str) -> Result<RawResponse, ApiError> {
        self.calls.borrow_mut().push((method, path_and_query.to_string()));
        match self.next() {
            Some(Ok(response)) => Ok(response),
            Some(Err(())) | None => Err(ApiError::Url(url::ParseError::EmptyHost)),
        }
    }
}

/// A UI effect performed through [`Host`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Confirm(String),
    Alert(String),
    Navigate(String),
    ClearCookie(String, String),
    Render(Region, String),
    RenderOptions(SelectList, Vec<SelectOption>),
    RenderPickers(PickerOptions, PickerOptions),
    CloseModal,
}

/// Records every effect in order. Confirmations are answered with a fixed
/// choice.
#[derive(Debug)]
pub struct RecordingHost {
    confirm: bool,
    search: SearchForm,
    user: String,
    effects: RefCell<Vec<Effect>>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            confirm: true,
            search: SearchForm::default(),
            user: String::new(),
            effects: RefCell::new(Vec::new()),
        }
    }
}

impl RecordingHost {
    /// A host whose user answers "no" to every confirmation.
    pub fn declining() -> Self {
        Self {
            confirm: false,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: SearchForm) -> Self {
        self.search = search;
        self
    }

    pub fn with_user(mut self, user: &str) -> Self {
        self.user = user.to_string();
        self
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.effects.borrow().clone()
    }

    /// Latest markup rendered into a region.
    pub fn rendered(&self, region: Region) -> Option<String> {
        self.effects.borrow().iter().rev().find_map(|effect| match effect {
            Effect::Render(r, html) if *r == region => Some(html.clone()),
            _ => None,
        })
    }

    fn record(&self, effect: Effect) {
        self.effects.borrow_mut().push(effect);
    }
}

impl Host for RecordingHost {
    fn confirm(&self, message: &str) -> bool {
        self.record(Effect::Confirm(message.to_string()));
        self.confirm
    }

    fn alert(&self, message: &str) {
        self.record(Effect::Alert(message.to_string()));
    }

    fn navigate(&self, target: &str) {
        self.record(Effect::Navigate(target.to_string()));
    }

    fn clear_cookie(&self, name: &str, path: &str) {
        self.record(Effect::ClearCookie(name.to_string(), path.to_string()));
    }

    fn render(&self, region: Region, html: String) {
        self.record(Effect::Render(region, html));
    }

    fn render_options(&self, select: SelectList, options: Vec<SelectOption>) {
        self.record(Effect::RenderOptions(select, options));
    }

    fn render_pickers(&self, dates: PickerOptions, times: PickerOptions) {
        self.record(Effect::RenderPickers(dates, times));
    }

    fn close_modal(&self) {
        self.record(Effect::CloseModal);
    }

    fn search_form(&self) -> SearchForm {
        self.search.clone()
    }

    fn selected_user(&self) -> String {
        self.user.clone()
    }
}
