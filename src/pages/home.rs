use dioxus::prelude::*;
use crate::catalog::CatalogTarget;
use crate::components::layout::ProcessSection;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "Insumos textiles para tu producción" }
            p { class: "hero-subtitle",
                "Telas, hilos y avíos por mayor y menor, con envío a todo el país."
            }
            div { class: "hero-actions",
                Link { to: CatalogTarget::All.path(), class: "btn-primary", "Ver catálogo" }
                Link { to: "/contacto", class: "btn-secondary", "Pedir cotización" }
            }
        }
        ProcessSection {}
    }
}
