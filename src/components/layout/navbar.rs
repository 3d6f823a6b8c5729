use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::layout::{Logo, WindowScrollHost};
use crate::components::navigation::CatalogNavigation;
use crate::menu::ListenerGuard;
use crate::types::Category;

const ICON_MENU: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" fill="none"><line x1="4" y1="7" x2="20" y2="7"/><line x1="4" y1="12" x2="20" y2="12"/><line x1="4" y1="17" x2="20" y2="17"/></svg>"#;
const ICON_CLOSE: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" fill="none"><line x1="6" y1="6" x2="18" y2="18"/><line x1="6" y1="18" x2="18" y2="6"/></svg>"#;

/// Site header. `categories` must already be the top-level subset.
#[component]
pub fn Navbar(categories: Vec<Category>) -> Element {
    let mut mobile_open = use_signal(|| false);
    let mut scrolled = use_signal(|| false);

    let scroll_events = use_coroutine(move |mut rx: UnboundedReceiver<bool>| async move {
        while let Some(next) = rx.next().await {
            scrolled.set(next);
        }
    });
    // Listening for the whole life of the navbar; taken out on unmount to detach
    let scroll_guard = use_hook(|| {
        let host = WindowScrollHost::new(scroll_events.tx());
        Rc::new(RefCell::new(Some(ListenerGuard::attach(&host))))
    });
    use_drop(move || {
        scroll_guard.borrow_mut().take();
    });

    rsx! {
        header { class: if scrolled() { "navbar scrolled" } else { "navbar" },
            div { class: "navbar-inner",
                Logo {}

                // Desktop
                nav { class: "navbar-links desktop-only",
                    Link { to: "/", class: "navbar-link", "Inicio" }
                    CatalogNavigation { categories: categories.clone() }
                    Link { to: "/contacto", class: "navbar-link", "Contacto" }
                }

                button {
                    class: "navbar-burger mobile-only",
                    r#type: "button",
                    "aria-label": if mobile_open() { "Cerrar menú" } else { "Abrir menú" },
                    onclick: move |_| mobile_open.set(!mobile_open()),
                    span { class: "btn-icon", dangerous_inner_html: if mobile_open() { ICON_CLOSE } else { ICON_MENU } }
                }
            }

            // Mobile overlay; the catalog accordion closes it through on_close
            if mobile_open() {
                div { class: "mobile-overlay",
                    div { class: "mobile-overlay-brand",
                        Logo { compact: true, on_navigate: move |_| mobile_open.set(false) }
                    }
                    nav { class: "mobile-links",
                        Link {
                            to: "/",
                            class: "mobile-link",
                            onclick: move |_| mobile_open.set(false),
                            "Inicio"
                        }
                        CatalogNavigation {
                            categories: categories.clone(),
                            is_mobile: true,
                            on_close: move |_| mobile_open.set(false),
                        }
                        Link {
                            to: "/contacto",
                            class: "mobile-link",
                            onclick: move |_| mobile_open.set(false),
                            "Contacto"
                        }
                    }
                }
            }
        }
    }
}
