use dioxus::prelude::*;

const LOGO_MARK: &str = r#"<svg viewBox="0 0 32 32" fill="none" stroke="currentColor" stroke-width="2"><circle cx="16" cy="16" r="13"/><path d="M6 12c6 3 14 3 20 0M6 20c6-3 14-3 20 0M16 3v26"/></svg>"#;

/// Brand link to the home page. `compact` drops the wordmark, leaving the mark.
#[component]
pub fn Logo(
    #[props(default)] compact: bool,
    on_navigate: Option<EventHandler<()>>,
) -> Element {
    let class = if compact { "logo compact" } else { "logo" };

    rsx! {
        Link {
            to: "/",
            class: "{class}",
            onclick: move |_| {
                if let Some(handler) = on_navigate {
                    handler.call(());
                }
            },
            span { class: "logo-mark", dangerous_inner_html: LOGO_MARK }
            if !compact {
                span { class: "logo-text",
                    span { class: "logo-name", "Textiles del Sur" }
                    span { class: "logo-tagline", "Insumos textiles" }
                }
            }
        }
    }
}
