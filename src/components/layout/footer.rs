use dioxus::prelude::*;
use crate::catalog::CatalogTarget;
use crate::components::layout::Logo;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Utc::now().format("%Y").to_string();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-grid",
                div { class: "footer-brand",
                    Logo {}
                    p { class: "footer-blurb", "Telas, hilos y avíos para talleres y confeccionistas." }
                }
                nav { class: "footer-links",
                    h4 { "Tienda" }
                    Link { to: CatalogTarget::All.path(), "Catálogo" }
                    Link { to: "/contacto", "Contacto" }
                }
            }
            p { class: "footer-copyright", "© {year} Textiles del Sur" }
        }
    }
}
