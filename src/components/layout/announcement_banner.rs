use dioxus::prelude::*;

#[component]
pub fn AnnouncementBanner(message: String) -> Element {
    let mut dismissed = use_signal(|| false);

    if dismissed() || message.trim().is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "announcement-banner", role: "status",
            p { class: "announcement-text", "{message}" }
            button {
                class: "announcement-close",
                r#type: "button",
                "aria-label": "Cerrar anuncio",
                onclick: move |_| dismissed.set(true),
                "×"
            }
        }
    }
}
