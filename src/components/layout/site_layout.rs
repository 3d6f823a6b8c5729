use dioxus::prelude::*;
use crate::app::Route;
use crate::components::layout::{AnnouncementBanner, Footer, Navbar};
use crate::hooks::{use_categories, use_storefront};

#[component]
pub fn SiteLayout() -> Element {
    let storefront = use_storefront();
    let catalog = use_categories();
    use_context_provider(|| catalog);
    let top_level = catalog.top_level.read().clone();

    rsx! {
        div { class: "site",
            AnnouncementBanner { message: storefront.config.announcement.clone() }
            Navbar { categories: top_level }
            main { class: "site-main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
