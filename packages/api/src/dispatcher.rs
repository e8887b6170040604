//! Every request the client makes and how the page reacts to its outcome.
//!
//! Each operation builds a [`Query`], sends it through the [`Transport`] and
//! hands the [`Outcome`] to [`Dispatcher::react`], which performs the reactions
//! shared by all call sites:
//!
//! | Status | Reaction |
//! |--------|----------|
//! | 200 | The body is returned to the operation, which renders it. |
//! | 400 | The operation's own message, or `Server Error: 400`. |
//! | 403 | Session cookies cleared, browser sent to the login page. |
//! | other | `Server Error: <code>`. A transport failure counts as `0`. |
//!
//! `check_admin_status` and `logout` handle their outcomes themselves.

use chrono::{Local, TimeZone, Utc};
use store::fragment::{format_fragment, parse_options};
use store::options::{date_options, time_options};
use store::{
    ClientConfig, Command, Modal, Region, SelectList, SelectOption, ValidationError, AVAILABLE_ROW,
    RESERVATION_ROW,
};

use crate::endpoint::{Endpoint, Method};
use crate::forms::{UserForm, VehicleForm};
use crate::host::Host;
use crate::outcome::Outcome;
use crate::query::{cache_bust_token, Query, Request};
use crate::session::SESSION_COOKIES;
use crate::transport::Transport;

/// Location a vehicle is moved to while out of service.
pub const MAINTENANCE_LOCATION: &str = "Maintenance";

/// Location a vehicle returns to after maintenance.
pub const POOL_LOCATION: &str = "Lackman Pool";

/// Value of the "Any" option the metadata selects start with.
pub const ANY_VALUE: &str = "-1";

const BAD_INPUT: &str = "Error: Bad Input";
const DUPLICATE_EMAIL: &str = "There is already a user registered with that email address";
const ADMIN_GRANT: &str =
    "You are attempting to add a user with administrator privileges, are you sure you want to do this?";

/// Sends requests for one page and applies their results through a [`Host`].
///
/// `Z` is the zone the pickers' dates and times are read in; the browser's
/// local zone unless a test fixes one.
pub struct Dispatcher<T, H, Z: TimeZone = Local> {
    config: ClientConfig,
    transport: T,
    host: H,
    tz: Z,
}

impl<T: Transport, H: Host> Dispatcher<T, H> {
    pub fn new(config: ClientConfig, transport: T, host: H) -> Self {
        Self::with_time_zone(config, transport, host, Local)
    }
}

impl<T: Transport, H: Host, Z: TimeZone> Dispatcher<T, H, Z> {
    pub fn with_time_zone(config: ClientConfig, transport: T, host: H, tz: Z) -> Self {
        Self {
            config,
            transport,
            host,
            tz,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ── Pipeline ─────────────────────────────────────────────────────

    /// Send a built request. GETs get a fresh cache-busting token.
    pub async fn send(&self, request: Request) -> Outcome {
        let request = match request.method() {
            Method::Get => {
                request.with_cache_bust(cache_bust_token(self.config.request.cache_bust_len))
            }
            Method::Post => request,
        };
        let method = request.method();
        let target = request.path_and_query();
        tracing::debug!("{} {}", method, target);

        match self.transport.send(method, &target).await {
            Ok(raw) => {
                let outcome = Outcome::from_status(raw.status, raw.body);
                if !outcome.is_success() {
                    tracing::warn!("{} {} returned {}", method, request.path(), outcome.status());
                }
                outcome
            }
            Err(e) => {
                tracing::error!("{} {} failed: {}", method, request.path(), e);
                Outcome::ServerError(0)
            }
        }
    }

    /// Build and send a query. A query that does not match its endpoint is
    /// reported and never sent.
    async fn dispatch(&self, query: Query) -> Option<Outcome> {
        match query.build(&self.config.endpoints) {
            Ok(request) => Some(self.send(request).await),
            Err(e) => {
                tracing::error!("Failed to build request: {}", e);
                self.host.alert(&e.to_string());
                None
            }
        }
    }

    /// Shared status handling. Returns the body of a 200.
    fn react(&self, outcome: Outcome, bad_input: Option<&str>) -> Option<String> {
        match outcome {
            Outcome::Success(body) => Some(body),
            Outcome::Unauthorized => {
                self.login_redirect();
                None
            }
            Outcome::ClientError(_) => {
                match bad_input {
                    Some(message) => self.host.alert(message),
                    None => self.host.alert(&server_error(400)),
                }
                None
            }
            Outcome::ServerError(code) => {
                self.host.alert(&server_error(code));
                None
            }
        }
    }

    async fn request(&self, query: Query, bad_input: Option<&str>) -> Option<String> {
        let outcome = self.dispatch(query).await?;
        self.react(outcome, bad_input)
    }

    fn clear_session(&self) {
        let path = self.config.endpoints.cookie_path();
        for name in SESSION_COOKIES {
            self.host.clear_cookie(name, &path);
        }
    }

    fn login_redirect(&self) {
        self.clear_session();
        self.host.navigate(&self.config.endpoints.login_page);
    }

    fn invalid(&self, error: ValidationError) {
        tracing::info!("Rejected input: {}", error);
        self.host.alert(&error.to_string());
    }

    fn now(&self) -> chrono::DateTime<Z> {
        Utc::now().with_timezone(&self.tz)
    }

    fn render_pickers(&self, days: u32) {
        let now = self.now();
        self.host.render_pickers(
            date_options(now.date_naive(), days),
            time_options(now.time()),
        );
    }

    // ── Admin: tables ────────────────────────────────────────────────

    pub async fn load_reservations_admin(&self) {
        if let Some(body) = self.request(Query::new(Endpoint::AdminLoadReservations), None).await {
            self.host.render(Region::Reservations, body);
        }
    }

    pub async fn load_vehicles_admin(&self) {
        if let Some(body) = self.request(Query::new(Endpoint::AdminLoadVehicles), None).await {
            self.host.render(Region::Vehicles, body);
        }
    }

    pub async fn load_users_admin(&self) {
        if let Some(body) = self.request(Query::new(Endpoint::AdminLoadUsers), None).await {
            self.host.render(Region::Users, body);
        }
    }

    /// Fill one of the admin modal's select lists. Loading the user list also
    /// refreshes the available vehicles.
    pub async fn load_select_admin(&self, select: SelectList) {
        let query = Query::new(Endpoint::AdminLoadSelect).param("id", select.id());
        let Some(body) = self.request(query, None).await else {
            return;
        };
        self.host.render_options(select, parse_options(&body));
        if select == SelectList::User {
            self.load_available_admin().await;
        }
    }

    /// Vehicles free in the chosen window, for the admin reservation modal.
    pub async fn load_available_admin(&self) {
        let form = self.host.search_form();
        let (begin, end) = match form.window.timestamps(&self.tz) {
            Ok(pair) => pair,
            Err(e) => return self.invalid(e),
        };
        let query = Query::new(Endpoint::AdminLoadAvailable)
            .param("capacity", &form.capacity)
            .param("lift", form.lift)
            .param("begin", begin)
            .param("end", end);
        if let Some(body) = self.request(query, None).await {
            self.host.render(Region::Available, body);
        }
    }

    // ── Admin: reservations ──────────────────────────────────────────

    /// Reserve `vehicle_id` for the user picked in `user-select`.
    pub async fn add_reservation_admin(&self, vehicle_id: &str) {
        let user_id = self.host.selected_user();
        let window = match self.host.search_form().window.window(&self.tz) {
            Ok(window) => window,
            Err(e) => return self.invalid(e),
        };
        let query = Query::new(Endpoint::AdminAddReservation)
            .param("vehicle_id", vehicle_id)
            .param("user_id", &user_id)
            .param("begin", window.begin())
            .param("end", window.end());
        tracing::debug!(
            "Reserving vehicle {} for user {} from {} to {}",
            vehicle_id,
            user_id,
            window.begin(),
            window.end()
        );
        if let Some(body) = self.request(query, Some(BAD_INPUT)).await {
            self.host.close_modal();
            self.host.render(Region::Reservations, body);
        }
    }

    pub async fn delete_reservation_admin(&self, reservation_id: &str) {
        if !self.host.confirm(&delete_reservation_prompt(reservation_id)) {
            return;
        }
        let query = Query::new(Endpoint::AdminDeleteReservation).param("reservation_id", reservation_id);
        if let Some(body) = self.request(query, None).await {
            self.host.render(Region::Reservations, body);
        }
    }

    // ── Admin: vehicles ──────────────────────────────────────────────

    pub async fn add_vehicle_admin(&self, form: &VehicleForm) {
        let query = vehicle_query(Endpoint::AdminAddVehicle, form);
        if let Some(body) = self.request(query, None).await {
            self.host.render(Region::Vehicles, body);
            self.host.close_modal();
        }
    }

    /// Save an edited vehicle row, given the text of its cells.
    pub async fn update_vehicle_admin(&self, cells: &[String]) {
        let form = match VehicleForm::from_row_cells(cells) {
            Ok(form) => form,
            Err(e) => return self.invalid(e),
        };
        let query = vehicle_query(Endpoint::AdminUpdateVehicle, &form);
        if let Some(body) = self.request(query, None).await {
            self.host.render(Region::Vehicles, body);
        }
    }

    pub async fn set_maintenance_admin(&self, vehicle_id: &str) {
        self.update_location(vehicle_id, MAINTENANCE_LOCATION).await;
    }

    pub async fn unset_maintenance_admin(&self, vehicle_id: &str) {
        self.update_location(vehicle_id, POOL_LOCATION).await;
    }

    async fn update_location(&self, vehicle_id: &str, location: &str) {
        let query = Query::new(Endpoint::AdminUpdateLocation)
            .param("vehicle_id", vehicle_id)
            .param("new_location", location);
        if let Some(body) = self.request(query, None).await {
            self.host.render(Region::Vehicles, body);
        }
    }

    pub async fn delete_vehicle_admin(&self, vehicle_id: &str) {
        let prompt = format!(
            "Deleting this vehicle will also delete all active reservations associated with \
             this vehicle. Are you sure you want to delete vehicle {vehicle_id}?"
        );
        if !self.host.confirm(&prompt) {
            return;
        }
        let query = Query::new(Endpoint::AdminDeleteVehicle).param("vehicle_id", vehicle_id);
        if let Some(body) = self.request(query, None).await {
            self.host.render(Region::Vehicles, body);
        }
    }

    // ── Admin: users ─────────────────────────────────────────────────

    pub async fn add_user_admin(&self, form: &UserForm) {
        if let Err(e) = form.validate() {
            return self.invalid(e);
        }
        if form.admin && !self.host.confirm(ADMIN_GRANT) {
            return;
        }
        let query = Query::new(Endpoint::AdminAddUser)
            .param("email", &form.email)
            .param("password", &form.password)
            .param("admin", form.admin);
        if let Some(body) = self.request(query, Some(DUPLICATE_EMAIL)).await {
            self.host.render(Region::Users, body);
            self.host.close_modal();
        }
    }

    /// Approve a pending registration without admin privilege.
    pub async fn approve_user_admin(&self, email: &str) {
        let query = Query::new(Endpoint::AdminApproveUser)
            .param("admin", false)
            .param("email", email);
        if let Some(body) = self.request(query, Some(DUPLICATE_EMAIL)).await {
            self.host.render(Region::Users, body);
        }
    }

    pub async fn delete_user_admin(&self, user_id: &str) {
        let prompt = format!(
            "Deleting this user will also delete all active reservations associated with \
             this user. Are you sure you want to delete user {user_id}?"
        );
        if !self.host.confirm(&prompt) {
            return;
        }
        let query = Query::new(Endpoint::AdminDeleteUser).param("user_id", user_id);
        if let Some(body) = self.request(query, None).await {
            self.host.render(Region::Users, body);
        }
    }

    /// Fill the select lists and pickers of a modal that was just opened.
    pub async fn populate_modal(&self, modal: Modal) {
        match modal {
            Modal::AddReservation => {
                self.render_pickers(self.config.options.admin_days);
                self.fill_select(SelectList::Capacity).await;
                self.load_select_admin(SelectList::User).await;
            }
            Modal::AddVehicle => {
                for select in [SelectList::Location, SelectList::Make, SelectList::Class] {
                    self.load_select_admin(select).await;
                }
            }
            Modal::AddUser => {}
        }
    }

    // ── User page ────────────────────────────────────────────────────

    /// The signed-in user's reservations. Admins are sent on to the admin page.
    pub async fn load_reservations(&self) {
        let Some(body) = self.request(Query::new(Endpoint::LoadReservations), None).await else {
            return;
        };
        self.host
            .render(Region::Reservations, format_fragment(&body, &RESERVATION_ROW));
        self.check_admin_status().await;
    }

    /// Vehicles free in the chosen window, for the user's add modal.
    pub async fn search_available(&self) {
        let form = self.host.search_form();
        let (begin, end) = match form.window.timestamps(&self.tz) {
            Ok(pair) => pair,
            Err(e) => return self.invalid(e),
        };
        let end = if self.config.search.end_mirrors_begin {
            begin
        } else {
            end
        };
        let capacity = Some(form.capacity.as_str()).filter(|c| *c != ANY_VALUE);
        let query = Query::new(Endpoint::Search)
            .param_opt("capacity", capacity)
            .param("begin", begin)
            .param("end", end)
            .param("lift", form.lift);
        if let Some(body) = self.request(query, None).await {
            self.host
                .render(Region::Available, format_fragment(&body, &AVAILABLE_ROW));
        }
    }

    pub async fn add_reservation(&self, vehicle_id: &str) {
        let window = match self.host.search_form().window.window(&self.tz) {
            Ok(window) => window,
            Err(e) => return self.invalid(e),
        };
        let query = Query::new(Endpoint::AddReservation)
            .param("v", vehicle_id)
            .param("begin", window.begin())
            .param("end", window.end());
        if let Some(body) = self.request(query, Some(BAD_INPUT)).await {
            self.host.close_modal();
            self.host
                .render(Region::Reservations, format_fragment(&body, &RESERVATION_ROW));
        }
    }

    pub async fn delete_reservation(&self, reservation_id: &str) {
        if !self.host.confirm(&delete_reservation_prompt(reservation_id)) {
            return;
        }
        let query = Query::new(Endpoint::DeleteReservation).param("r", reservation_id);
        if let Some(body) = self.request(query, None).await {
            self.host
                .render(Region::Reservations, format_fragment(&body, &RESERVATION_ROW));
        }
    }

    /// Fill the user add modal: pickers, capacities and the first search.
    pub async fn populate_add_modal(&self) {
        self.render_pickers(self.config.options.user_days);
        self.fill_select(SelectList::Capacity).await;
        self.search_available().await;
    }

    // ── Shared ───────────────────────────────────────────────────────

    /// Run an action triggered from inside a server fragment.
    pub async fn run(&self, command: Command) {
        tracing::debug!("Fragment command {:?}", command);
        match command {
            Command::AddReservationAdmin { vehicle_id } => self.add_reservation_admin(&vehicle_id).await,
            Command::DeleteReservationAdmin { reservation_id } => {
                self.delete_reservation_admin(&reservation_id).await
            }
            Command::DeleteVehicle { vehicle_id } => self.delete_vehicle_admin(&vehicle_id).await,
            Command::SetMaintenance { vehicle_id } => self.set_maintenance_admin(&vehicle_id).await,
            Command::UnsetMaintenance { vehicle_id } => self.unset_maintenance_admin(&vehicle_id).await,
            Command::UpdateVehicle { cells } => self.update_vehicle_admin(&cells).await,
            Command::DeleteUser { user_id } => self.delete_user_admin(&user_id).await,
            Command::ApproveUser { email } => self.approve_user_admin(&email).await,
            Command::AddReservation { vehicle_id } => self.add_reservation(&vehicle_id).await,
            Command::DeleteReservation { reservation_id } => {
                self.delete_reservation(&reservation_id).await
            }
        }
    }

    /// Fill a select list from `metadata.cgi`, led by a selected "Any" option.
    pub async fn fill_select(&self, select: SelectList) {
        let query = Query::new(Endpoint::Metadata).param("id", select.id());
        let Some(body) = self.request(query, None).await else {
            return;
        };
        let mut options = vec![SelectOption::new(ANY_VALUE, "Any").selected()];
        options.extend(parse_options(&body).into_iter().map(|mut option| {
            option.selected = false;
            option
        }));
        self.host.render_options(select, options);
    }

    /// Send admins to the admin page. Any other answer leaves the page alone.
    pub async fn check_admin_status(&self) {
        let Some(outcome) = self.dispatch(Query::new(Endpoint::Redirect)).await else {
            return;
        };
        match outcome {
            Outcome::Success(_) => self.host.navigate(&self.config.endpoints.admin_page),
            other => tracing::debug!("Not an admin session ({})", other.status()),
        }
    }

    pub async fn logout(&self) {
        let Some(outcome) = self.dispatch(Query::new(Endpoint::Logout)).await else {
            return;
        };
        match outcome {
            Outcome::Success(_) | Outcome::Unauthorized => {
                tracing::info!("Logged out");
                self.login_redirect();
            }
            other => self
                .host
                .alert(&format!("Logout Failed: {}", other.status())),
        }
    }
}

fn server_error(code: u16) -> String {
    format!("Server Error: {code}")
}

fn delete_reservation_prompt(reservation_id: &str) -> String {
    format!("Are you sure you want to delete reservation {reservation_id}?")
}

fn vehicle_query(endpoint: Endpoint, form: &VehicleForm) -> Query {
    form.pairs()
        .into_iter()
        .fold(Query::new(endpoint), |query, (name, value)| query.param(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SearchForm;
    use crate::testing::{Effect, MockTransport, RecordingHost};
    use store::WindowSelection;

    type TestDispatcher = Dispatcher<MockTransport, RecordingHost, Utc>;

    fn dispatcher(transport: MockTransport, host: RecordingHost) -> TestDispatcher {
        Dispatcher::with_time_zone(ClientConfig::default(), transport, host, Utc)
    }

    fn search(capacity: &str, start: &str, end: &str) -> SearchForm {
        SearchForm {
            capacity: capacity.to_string(),
            lift: true,
            window: WindowSelection {
                start_date: "2015-08-12".to_string(),
                start_time: start.to_string(),
                end_date: "2015-08-12".to_string(),
                end_time: end.to_string(),
            },
        }
    }

    // 2015-08-12 09:00 and 17:00 UTC.
    const NINE: i64 = 1_439_370_000;
    const FIVE: i64 = 1_439_398_800;

    #[tokio::test]
    async fn get_carries_cache_bust_token() {
        let d = dispatcher(MockTransport::ok("<table></table>"), RecordingHost::default());
        d.load_users_admin().await;

        let calls = d.transport().calls();
        assert_eq!(calls.len(), 1);
        let (method, target) = &calls[0];
        assert_eq!(*method, Method::Get);
        let prefix = "/cgi-bin/admin.cgi?action=load_users&random=";
        assert!(target.starts_with(prefix), "{target}");
        assert_eq!(target.len(), prefix.len() + 10);
        assert_eq!(
            d.host().effects(),
            vec![Effect::Render(Region::Users, "<table></table>".to_string())]
        );
    }

    #[tokio::test]
    async fn post_has_no_cache_bust_token() {
        let d = dispatcher(MockTransport::ok("v"), RecordingHost::default());
        d.set_maintenance_admin("12").await;
        d.unset_maintenance_admin("12").await;
        assert_eq!(
            d.transport().targets(),
            vec![
                "/cgi-bin/admin.cgi?action=update_location&vehicle_id=12&new_location=Maintenance",
                "/cgi-bin/admin.cgi?action=update_location&vehicle_id=12&new_location=Lackman+Pool",
            ]
        );
    }

    #[tokio::test]
    async fn duplicate_email_leaves_users_untouched() {
        let d = dispatcher(MockTransport::status(400), RecordingHost::default());
        let form = UserForm {
            email: "jane@example.edu".into(),
            password: "pw".into(),
            password_confirm: "pw".into(),
            admin: false,
        };
        d.add_user_admin(&form).await;
        assert_eq!(
            d.host().effects(),
            vec![Effect::Alert(DUPLICATE_EMAIL.to_string())]
        );
        assert_eq!(
            d.transport().targets(),
            vec!["/cgi-bin/admin.cgi?action=add_user&email=jane%40example.edu&password=pw&admin=false"]
        );
    }

    #[tokio::test]
    async fn password_mismatch_sends_nothing() {
        let d = dispatcher(MockTransport::ok(""), RecordingHost::default());
        let form = UserForm {
            email: "jane@example.edu".into(),
            password: "a".into(),
            password_confirm: "b".into(),
            admin: true,
        };
        d.add_user_admin(&form).await;
        assert!(d.transport().calls().is_empty());
        assert_eq!(
            d.host().effects(),
            vec![Effect::Alert("Password fields must match".to_string())]
        );
    }

    #[tokio::test]
    async fn admin_grant_needs_confirmation() {
        let d = dispatcher(MockTransport::ok("users"), RecordingHost::declining());
        let form = UserForm {
            email: "root@example.edu".into(),
            password: "pw".into(),
            password_confirm: "pw".into(),
            admin: true,
        };
        d.add_user_admin(&form).await;
        assert!(d.transport().calls().is_empty());
        assert_eq!(d.host().effects(), vec![Effect::Confirm(ADMIN_GRANT.to_string())]);

        let d = dispatcher(MockTransport::ok("users"), RecordingHost::default());
        d.add_user_admin(&form).await;
        assert_eq!(
            d.host().effects(),
            vec![
                Effect::Confirm(ADMIN_GRANT.to_string()),
                Effect::Render(Region::Users, "users".to_string()),
                Effect::CloseModal,
            ]
        );
    }

    #[tokio::test]
    async fn forbidden_clears_session_and_redirects() {
        let d = dispatcher(MockTransport::status(403), RecordingHost::default());
        d.load_vehicles_admin().await;
        assert_eq!(
            d.host().effects(),
            vec![
                Effect::ClearCookie("token".to_string(), "/cgi-bin/".to_string()),
                Effect::ClearCookie("user".to_string(), "/cgi-bin/".to_string()),
                Effect::Navigate("/login.html".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn declined_deletes_send_nothing() {
        let d = dispatcher(MockTransport::ok("x"), RecordingHost::declining());
        d.delete_vehicle_admin("3").await;
        d.delete_user_admin("4").await;
        d.delete_reservation_admin("5").await;
        d.delete_reservation("6").await;

        assert!(d.transport().calls().is_empty());
        let effects = d.host().effects();
        assert_eq!(effects.len(), 4);
        assert!(effects.iter().all(|e| matches!(e, Effect::Confirm(_))));
        assert_eq!(
            effects[3],
            Effect::Confirm("Are you sure you want to delete reservation 6?".to_string())
        );
    }

    #[tokio::test]
    async fn confirmed_delete_renders_formatted_reservations() {
        let body = "<tr><td>6</td><td>2015-08-12 09:00:00</td><td>2015-08-12 17:00:00</td>\
                    <td>3</td><td>12</td><td>0</td><td>Lackman Pool</td><td></td></tr>";
        let d = dispatcher(MockTransport::ok(body), RecordingHost::default());
        d.delete_reservation("6").await;

        assert_eq!(d.transport().targets(), vec!["/cgi-bin/reservations.cgi?action=delete&r=6"]);
        let rendered = d.host().rendered(Region::Reservations).unwrap();
        assert!(rendered.contains("<td>#6</td>"));
        assert!(rendered.contains("<td>No</td>"));
        assert!(rendered.contains("9:00 AM<br />Wed, Aug 12, 2015"));
    }

    #[tokio::test]
    async fn server_errors_are_reported_with_their_code() {
        let d = dispatcher(MockTransport::status(500), RecordingHost::default());
        d.load_reservations_admin().await;
        assert_eq!(d.host().effects(), vec![Effect::Alert("Server Error: 500".to_string())]);

        let d = dispatcher(MockTransport::failing(), RecordingHost::default());
        d.load_reservations_admin().await;
        assert_eq!(d.host().effects(), vec![Effect::Alert("Server Error: 0".to_string())]);
    }

    #[tokio::test]
    async fn bad_input_on_reservations() {
        let host = RecordingHost::default().with_search(search("-1", "09:00", "17:00"));
        let d = dispatcher(MockTransport::status(400), host);
        d.add_reservation("4").await;
        assert_eq!(d.host().effects(), vec![Effect::Alert(BAD_INPUT.to_string())]);
        assert_eq!(
            d.transport().targets(),
            vec![format!("/cgi-bin/reservations.cgi?action=add&v=4&begin={NINE}&end={FIVE}")]
        );
    }

    #[tokio::test]
    async fn reservation_window_must_not_be_empty() {
        let host = RecordingHost::default()
            .with_search(search("-1", "17:00", "09:00"))
            .with_user("21");
        let d = dispatcher(MockTransport::ok(""), host);
        d.add_reservation("4").await;
        d.add_reservation_admin("4").await;
        assert!(d.transport().calls().is_empty());
        let message = "Error: Start Time must be before End Time".to_string();
        assert_eq!(
            d.host().effects(),
            vec![Effect::Alert(message.clone()), Effect::Alert(message)]
        );
    }

    #[tokio::test]
    async fn admin_reservation_closes_modal() {
        let host = RecordingHost::default()
            .with_search(search("-1", "09:00", "17:00"))
            .with_user("21");
        let d = dispatcher(MockTransport::ok("res"), host);
        d.add_reservation_admin("4").await;
        assert_eq!(
            d.transport().targets(),
            vec![format!(
                "/cgi-bin/admin.cgi?action=add_reservation&vehicle_id=4&user_id=21&begin={NINE}&end={FIVE}"
            )]
        );
        assert_eq!(
            d.host().effects(),
            vec![Effect::CloseModal, Effect::Render(Region::Reservations, "res".to_string())]
        );
    }

    #[tokio::test]
    async fn search_mirrors_begin_into_end_by_default() {
        let host = RecordingHost::default().with_search(search("-1", "09:00", "17:00"));
        let d = dispatcher(MockTransport::ok(""), host);
        d.search_available().await;
        let target = &d.transport().targets()[0];
        assert!(target.starts_with(&format!(
            "/cgi-bin/reservations.cgi?action=search&begin={NINE}&end={NINE}&lift=true&random="
        )));
        assert!(!target.contains("capacity"));
    }

    #[tokio::test]
    async fn search_sends_real_end_when_configured() {
        let host = RecordingHost::default().with_search(search("12", "09:00", "17:00"));
        let config = ClientConfig::default().with_end_mirrors_begin(false);
        let d = Dispatcher::with_time_zone(config, MockTransport::ok(""), host, Utc);
        d.search_available().await;
        assert!(d.transport().targets()[0].starts_with(&format!(
            "/cgi-bin/reservations.cgi?action=search&capacity=12&begin={NINE}&end={FIVE}&lift=true"
        )));
    }

    #[tokio::test]
    async fn admin_availability_sends_capacity_as_is() {
        let host = RecordingHost::default().with_search(search("-1", "09:00", "17:00"));
        let d = dispatcher(MockTransport::ok("avail"), host);
        d.load_available_admin().await;
        assert!(d.transport().targets()[0].starts_with(&format!(
            "/cgi-bin/admin.cgi?action=load_available&capacity=-1&lift=true&begin={NINE}&end={FIVE}&random="
        )));
        assert_eq!(d.host().rendered(Region::Available).as_deref(), Some("avail"));
    }

    #[tokio::test]
    async fn user_select_chains_availability() {
        let transport = MockTransport::ok(r#"<option value="21">Jane</option>"#);
        let host = RecordingHost::default().with_search(search("-1", "09:00", "17:00"));
        let d = dispatcher(transport, host);
        d.load_select_admin(SelectList::User).await;

        let targets = d.transport().targets();
        assert_eq!(targets.len(), 2);
        assert!(targets[0].starts_with("/cgi-bin/admin.cgi?action=load_select&id=user-select&random="));
        assert!(targets[1].starts_with("/cgi-bin/admin.cgi?action=load_available"));
        assert_eq!(
            d.host().effects()[0],
            Effect::RenderOptions(SelectList::User, vec![SelectOption::new("21", "Jane")])
        );
    }

    #[tokio::test]
    async fn fill_select_leads_with_any() {
        let transport =
            MockTransport::ok(r#"<option value="8" selected>8</option><option value="12">12</option>"#);
        let d = dispatcher(transport, RecordingHost::default());
        d.fill_select(SelectList::Capacity).await;

        assert!(d.transport().targets()[0].starts_with("/cgi-bin/metadata.cgi?id=capacity-select&random="));
        assert_eq!(
            d.host().effects(),
            vec![Effect::RenderOptions(
                SelectList::Capacity,
                vec![
                    SelectOption::new("-1", "Any").selected(),
                    SelectOption::new("8", "8"),
                    SelectOption::new("12", "12"),
                ]
            )]
        );
    }

    #[tokio::test]
    async fn admin_check_only_acts_on_success() {
        let d = dispatcher(MockTransport::status(403), RecordingHost::default());
        d.check_admin_status().await;
        assert!(d.host().effects().is_empty());

        let d = dispatcher(MockTransport::ok(""), RecordingHost::default());
        d.check_admin_status().await;
        assert_eq!(d.host().effects(), vec![Effect::Navigate("/admin.html".to_string())]);
    }

    #[tokio::test]
    async fn user_reservations_render_before_admin_check() {
        let transport = MockTransport::ok("<td>1</td>").respond(403, "");
        let d = dispatcher(transport, RecordingHost::default());
        d.load_reservations().await;

        let targets = d.transport().targets();
        assert!(targets[0].starts_with("/cgi-bin/reservations.cgi?random="));
        assert!(targets[1].starts_with("/cgi-bin/redirect.cgi?random="));
        assert_eq!(
            d.host().effects(),
            vec![Effect::Render(Region::Reservations, "<td>#1</td>".to_string())]
        );
    }

    #[tokio::test]
    async fn logout_outcomes() {
        let d = dispatcher(MockTransport::ok(""), RecordingHost::default());
        d.logout().await;
        assert_eq!(d.transport().targets(), vec!["/cgi-bin/auth?logout"]);
        assert_eq!(d.transport().calls()[0].0, Method::Post);
        assert_eq!(d.host().effects().last(), Some(&Effect::Navigate("/login.html".to_string())));
        assert_eq!(d.host().effects().len(), 3);

        let d = dispatcher(MockTransport::status(400), RecordingHost::default());
        d.logout().await;
        assert_eq!(d.host().effects(), vec![Effect::Alert("Logout Failed: 400".to_string())]);
    }

    #[tokio::test]
    async fn update_vehicle_from_row_cells() {
        let cells: Vec<String> = [
            "12", "15", "Lackman Pool", "2010", "Ford", "Van", "White van", "1", "4", "ABC 123",
            "1FT", "<button>Save</button>",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let d = dispatcher(MockTransport::ok("vehicles"), RecordingHost::default());
        d.update_vehicle_admin(&cells).await;
        assert_eq!(
            d.transport().targets(),
            vec![
                "/cgi-bin/admin.cgi?action=update_vehicle&vehicle_id=12&capacity=15\
                 &location=Lackman+Pool&year=2010&make=Ford&class=Van&description=White+van\
                 &lift=1&ties=4&license=ABC+123&vin=1FT"
            ]
        );

        let d = dispatcher(MockTransport::ok("vehicles"), RecordingHost::default());
        d.update_vehicle_admin(&cells[..3]).await;
        assert!(d.transport().calls().is_empty());
        assert!(matches!(d.host().effects()[0], Effect::Alert(_)));
    }

    #[tokio::test]
    async fn reservation_modal_population_order() {
        let host = RecordingHost::default().with_search(search("-1", "09:00", "17:00"));
        let d = dispatcher(MockTransport::ok(""), host);
        d.populate_modal(Modal::AddReservation).await;

        let targets = d.transport().targets();
        assert_eq!(targets.len(), 3);
        assert!(targets[0].contains("metadata.cgi?id=capacity-select"));
        assert!(targets[1].contains("id=user-select"));
        assert!(targets[2].contains("action=load_available"));
        match &d.host().effects()[0] {
            Effect::RenderPickers(dates, times) => {
                assert_eq!(dates.start.len(), 60);
                assert_eq!(times.start.len(), 96);
            }
            other => panic!("expected pickers first, got {other:?}"),
        }

        let d = dispatcher(MockTransport::ok(""), RecordingHost::default());
        d.populate_modal(Modal::AddUser).await;
        assert!(d.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn fragment_commands_reach_their_operation() {
        let d = dispatcher(MockTransport::ok("users"), RecordingHost::default());
        let command = Command::from_call("approveUserAdmin", "jane@example.edu").unwrap();
        d.run(command).await;
        assert_eq!(
            d.transport().targets(),
            vec!["/cgi-bin/admin.cgi?action=approve_user&admin=false&email=jane%40example.edu"]
        );
        assert_eq!(d.host().rendered(Region::Users).as_deref(), Some("users"));

        let d = dispatcher(MockTransport::ok(""), RecordingHost::declining());
        d.run(Command::from_call("deleteReservationAdmin", "9").unwrap()).await;
        assert!(d.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn user_add_modal_population() {
        let host = RecordingHost::default().with_search(search("-1", "09:00", "17:00"));
        let d = dispatcher(MockTransport::ok(""), host);
        d.populate_add_modal().await;
        let targets = d.transport().targets();
        assert_eq!(targets.len(), 2);
        assert!(targets[1].contains("action=search"));
        assert!(matches!(
            &d.host().effects()[0],
            Effect::RenderPickers(dates, _) if dates.end.len() == 30
        ));
    }

    #[tokio::test]
    async fn added_vehicle_renders_then_closes_modal() {
        let form = VehicleForm {
            vehicle_id: "12".into(),
            capacity: "15".into(),
            location: "Lackman Pool".into(),
            lift: "false".into(),
            ..VehicleForm::default()
        };
        let d = dispatcher(MockTransport::ok("v"), RecordingHost::default());
        d.add_vehicle_admin(&form).await;

        let targets = d.transport().targets();
        assert_eq!(targets.len(), 1);
        assert!(targets[0].starts_with("/cgi-bin/admin.cgi?action=add_vehicle&vehicle_id=12&capacity=15"));
        assert_eq!(d.transport().calls()[0].0, Method::Post);
        assert_eq!(
            d.host().effects(),
            vec![Effect::Render(Region::Vehicles, "v".to_string()), Effect::CloseModal]
        );
    }

    #[tokio::test]
    async fn vehicle_modal_loads_its_three_selects() {
        let body = r#"<option value="3">Lackman Pool</option>"#;
        let d = dispatcher(MockTransport::ok(body), RecordingHost::default());
        d.populate_modal(Modal::AddVehicle).await;

        let targets = d.transport().targets();
        assert_eq!(targets.len(), 3);
        for (target, id) in targets.iter().zip(["location-select", "make-select", "class-select"]) {
            assert!(target.contains("action=load_select"), "{target}");
            assert!(target.contains(&format!("id={id}")), "{target}");
        }
        let option = vec![SelectOption::new("3", "Lackman Pool")];
        assert_eq!(
            d.host().effects(),
            vec![
                Effect::RenderOptions(SelectList::Location, option.clone()),
                Effect::RenderOptions(SelectList::Make, option.clone()),
                Effect::RenderOptions(SelectList::Class, option),
            ]
        );
    }

    #[tokio::test]
    async fn forbidden_logout_still_clears_session() {
        let d = dispatcher(MockTransport::status(403), RecordingHost::default());
        d.logout().await;
        assert_eq!(
            d.host().effects(),
            vec![
                Effect::ClearCookie("token".to_string(), "/cgi-bin/".to_string()),
                Effect::ClearCookie("user".to_string(), "/cgi-bin/".to_string()),
                Effect::Navigate("/login.html".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn approving_a_duplicate_email_alerts() {
        let d = dispatcher(MockTransport::status(400), RecordingHost::default());
        d.approve_user_admin("jane@example.edu").await;
        assert_eq!(
            d.host().effects(),
            vec![Effect::Alert(DUPLICATE_EMAIL.to_string())]
        );
        assert!(d.host().rendered(Region::Users).is_none());
    }
}
