pub mod api;
pub mod controller;
pub mod pages;

use dioxus::prelude::*;
use pages::{AppLayout, Home};
use roselia_common::SiteConfig;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Deployment settings, baked in at build time
const SITE_CONFIG_JSON: &str = include_str!("../site.json");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| SiteConfig::from_json_or_default(SITE_CONFIG_JSON));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
