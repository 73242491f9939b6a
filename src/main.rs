use dioxus::prelude::*;

use navbar_dropdown::{App, NavbarConfig};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

static NAVBAR_CONFIG: &str = include_str!("../assets/navbar.json");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(Root);
}

#[component]
fn Root() -> Element {
    use_context_provider(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        App {}
    }
}

fn load_config() -> NavbarConfig {
    match NavbarConfig::from_json(NAVBAR_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "invalid navbar config, using defaults");
            NavbarConfig::default()
        }
    }
}
