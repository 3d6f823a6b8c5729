use dioxus::prelude::*;

use crate::components::layout::SiteLayout;
use crate::config::StorefrontConfig;
use crate::hooks::Storefront;
use crate::pages::{Contact, Home, Products};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/productos?:categoria")]
        Products { categoria: String },
        #[route("/contacto")]
        Contact {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| Storefront::new(StorefrontConfig::load()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Textiles del Sur" }

        Router::<Route> {}
    }
}
