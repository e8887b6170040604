//! Session cookies.
//!
//! The CGI programs set the cookies; the client only ever removes them.

/// Cookies identifying the session, scoped to the CGI root.
pub const SESSION_COOKIES: [&str; 2] = ["token", "user"];

const EPOCH: &str = "Thu, 01 Jan 1970 00:00:00 UTC";

/// `document.cookie` assignment that expires `name` under `path`.
pub fn expired_cookie(name: &str, path: &str) -> String {
    format!("{name}=;expires={EPOCH};path={path}")
}
