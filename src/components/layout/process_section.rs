use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        title: "Elegí tus telas",
        description: "Recorré el catálogo y filtrá por categoría.",
    },
    ProcessStep {
        title: "Pedí tu cotización",
        description: "Contanos cantidades y te respondemos en el día.",
    },
    ProcessStep {
        title: "Confirmá el pedido",
        description: "Acordamos precio, plazos y forma de pago.",
    },
    ProcessStep {
        title: "Recibí en tu taller",
        description: "Despachamos a todo el país.",
    },
];

#[component]
pub fn ProcessSection() -> Element {
    rsx! {
        section { class: "process-section",
            h2 { class: "section-title", "¿Cómo trabajamos?" }
            ol { class: "process-steps",
                for (index, step) in PROCESS_STEPS.iter().enumerate() {
                    li { key: "{index}", class: "process-step",
                        span { class: "process-step-number", {(index + 1).to_string()} }
                        h3 { class: "process-step-title", "{step.title}" }
                        p { class: "process-step-description", "{step.description}" }
                    }
                }
            }
        }
    }
}
