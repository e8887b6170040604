use dioxus::prelude::*;

use store::ClientConfig;
use ui::views::{AdminView, ReservationsView};
use ui::{ActionRunner, PageProvider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Reservations {},
    #[route("/admin.html")]
    Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Configuration compiled into the binary.
const CONFIG_TOML: &str = include_str!("../motorpool.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}, using defaults: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        PageProvider {
            config,
            ActionRunner {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn Reservations() -> Element {
    rsx! { ReservationsView {} }
}

#[component]
fn Admin() -> Element {
    rsx! { AdminView {} }
}
