//! # Client configuration: `motorpool.toml`
//!
//! Defines the TOML configuration the web client is built with. The file is
//! embedded into the wasm binary and parsed once at startup; it tells the client
//! where the CGI programs live, where to send the user on login/logout, and how
//! many days the reservation pickers offer.
//!
//! ## Structure
//!
//! ```toml
//! [endpoints]
//! cgi_root = "/cgi-bin"
//! admin_page = "/admin.html"
//! login_page = "/login.html"
//!
//! [options]
//! admin_days = 60
//! user_days = 30
//!
//! [request]
//! cache_bust_len = 10
//!
//! [search]
//! end_mirrors_begin = true
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`EndpointsConfig`] | CGI root and the two landing pages. Builds every endpoint path. |
//! | [`OptionsConfig`] | Number of days offered by the admin and user date pickers. |
//! | [`RequestConfig`] | Length of the cache-busting token appended to GET requests. |
//! | [`SearchConfig`] | Wire compatibility switch for the availability search. |
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `motorpool.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub options: OptionsConfig,
    #[serde(default)]
    pub request: RequestConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Locations of the CGI programs and landing pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Directory the CGI programs are served from, without a trailing slash.
    #[serde(default = "default_cgi_root")]
    pub cgi_root: String,
    /// Landing page for users holding admin privilege.
    #[serde(default = "default_admin_page")]
    pub admin_page: String,
    /// Landing page for unauthenticated users.
    #[serde(default = "default_login_page")]
    pub login_page: String,
}

fn default_cgi_root() -> String {
    "/cgi-bin".to_string()
}

fn default_admin_page() -> String {
    "/admin.html".to_string()
}

fn default_login_page() -> String {
    "/login.html".to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            cgi_root: default_cgi_root(),
            admin_page: default_admin_page(),
            login_page: default_login_page(),
        }
    }
}

impl EndpointsConfig {
    /// Absolute path of a program under the CGI root: `cgi("admin.cgi")`.
    pub fn cgi(&self, program: &str) -> String {
        format!("{}/{}", self.cgi_root.trim_end_matches('/'), program)
    }

    /// Path the session cookies are scoped to (`/cgi-bin/`).
    pub fn cookie_path(&self) -> String {
        format!("{}/", self.cgi_root.trim_end_matches('/'))
    }
}

/// Date picker sizes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionsConfig {
    #[serde(default = "default_admin_days")]
    pub admin_days: u32,
    #[serde(default = "default_user_days")]
    pub user_days: u32,
}

fn default_admin_days() -> u32 {
    60
}

fn default_user_days() -> u32 {
    30
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            admin_days: default_admin_days(),
            user_days: default_user_days(),
        }
    }
}

/// Request settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Length of the random `random=` token appended to every GET.
    #[serde(default = "default_cache_bust_len")]
    pub cache_bust_len: usize,
}

fn default_cache_bust_len() -> usize {
    10
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            cache_bust_len: default_cache_bust_len(),
        }
    }
}

/// Availability search settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// The deployed `reservations.cgi` has always received the begin timestamp
    /// in its `end` parameter. Set to `false` once the server is confirmed to
    /// accept the real end timestamp.
    #[serde(default = "default_end_mirrors_begin")]
    pub end_mirrors_begin: bool,
}

fn default_end_mirrors_begin() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            end_mirrors_begin: default_end_mirrors_begin(),
        }
    }
}

impl ClientConfig {
    /// Builder method to toggle the legacy search `end` parameter.
    pub fn with_end_mirrors_begin(mut self, mirror: bool) -> Self {
        self.search.end_mirrors_begin = mirror;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "motorpool.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
