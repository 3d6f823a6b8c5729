use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::catalog::{catalog_links, CatalogLink};
use crate::components::navigation::outside_click::DocumentPointerHost;
use crate::menu::{ExpandableMenu, HoverDropdown, MenuVariant, PointerTarget, TapAccordion};
use crate::types::Category;

const TOGGLE_LABEL: &str = "Catálogo";

/// "Catálogo" menu: a hover dropdown on desktop, a tap accordion on mobile.
///
/// `categories` is rendered exactly as given; callers pass top-level entries
/// only (see `catalog::top_level_categories`). `on_close` fires once per link
/// chosen so an enclosing overlay can dismiss itself.
#[component]
pub fn CatalogNavigation(
    categories: Vec<Category>,
    #[props(default)] is_mobile: bool,
    on_close: Option<EventHandler<()>>,
) -> Element {
    match MenuVariant::from_is_mobile(is_mobile) {
        MenuVariant::Desktop => rsx! {
            DesktopCatalogMenu { categories, on_close }
        },
        MenuVariant::Mobile => rsx! {
            MobileCatalogMenu { categories, on_close }
        },
    }
}

#[component]
fn DesktopCatalogMenu(
    categories: Vec<Category>,
    #[props(!optional)] on_close: Option<EventHandler<()>>,
) -> Element {
    let mut menu = use_signal(HoverDropdown::<DocumentPointerHost>::new);

    // Outside pointer-downs arrive from the document listener through this channel
    let pointer_events = use_coroutine(move |mut rx: UnboundedReceiver<PointerTarget>| async move {
        while let Some(target) = rx.next().await {
            menu.write().pointer_down(target);
        }
    });
    let host = use_hook(|| DocumentPointerHost::new(pointer_events.tx()));

    // Unmount while open: closing drops the listener guard
    use_drop(move || {
        if let Ok(mut menu) = menu.try_write() {
            menu.close();
        }
    });

    let is_open = menu.read().is_open();
    let links = catalog_links(&categories);
    let host_for_mount = host.clone();
    let host_for_enter = host.clone();

    rsx! {
        div {
            class: "catalog-nav",
            onmounted: move |event| {
                if let Some(element) = event.data().downcast::<web_sys::Element>() {
                    host_for_mount.set_root(element.clone());
                }
            },
            onmouseenter: move |_| menu.write().pointer_enter(&host_for_enter),
            onmouseleave: move |_| menu.write().pointer_leave(),

            button {
                class: if is_open { "catalog-nav-toggle active" } else { "catalog-nav-toggle" },
                r#type: "button",
                "aria-haspopup": "true",
                "aria-expanded": "{is_open}",
                "{TOGGLE_LABEL}"
                span { class: if is_open { "catalog-chevron open" } else { "catalog-chevron" }, "▾" }
            }

            if is_open {
                div { class: "catalog-dropdown",
                    CatalogLinkList {
                        links,
                        link_class: "catalog-dropdown-link",
                        on_select: move |_| {
                            menu.write().select_link(on_close.map(|handler| move || handler.call(())));
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn MobileCatalogMenu(
    categories: Vec<Category>,
    #[props(!optional)] on_close: Option<EventHandler<()>>,
) -> Element {
    let mut menu = use_signal(TapAccordion::new);

    let is_open = menu.read().is_open();
    let links = catalog_links(&categories);

    rsx! {
        div { class: "catalog-accordion",
            button {
                class: "catalog-accordion-toggle",
                r#type: "button",
                "aria-expanded": "{is_open}",
                onclick: move |_| menu.write().toggle(),
                "{TOGGLE_LABEL}"
                span { class: if is_open { "catalog-chevron open" } else { "catalog-chevron" }, "▾" }
            }

            if is_open {
                div { class: "catalog-accordion-body",
                    CatalogLinkList {
                        links,
                        link_class: "catalog-accordion-link",
                        on_select: move |_| {
                            menu.write().select_link(on_close.map(|handler| move || handler.call(())));
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn CatalogLinkList(
    links: Vec<CatalogLink>,
    #[props(into)] link_class: String,
    on_select: EventHandler<()>,
) -> Element {
    rsx! {
        ul { class: "catalog-links",
            for (index, link) in links.into_iter().enumerate() {
                li { key: "{index}",
                    Link {
                        to: link.href(),
                        class: "{link_class}",
                        onclick: move |_| on_select.call(()),
                        "{link.label}"
                    }
                }
            }
        }
    }
}
