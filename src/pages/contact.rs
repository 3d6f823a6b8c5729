use dioxus::prelude::*;
use crate::hooks::use_storefront;
use crate::webhook::{FormSubmission, SubmissionKind};

#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Sent,
    Invalid(String),
    Failed,
}

/// Splits the free-text product list of a quote request, one item per line.
pub fn parse_product_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn Contact() -> Element {
    let storefront = use_storefront();

    let mut kind = use_signal(|| SubmissionKind::Contact);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut products = use_signal(String::new);
    let mut status = use_signal(|| FormStatus::Idle);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        if status() == FormStatus::Sending {
            return;
        }

        let submission = FormSubmission {
            kind: kind(),
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            phone: phone().trim().to_string(),
            company: company().trim().to_string(),
            message: message().trim().to_string(),
            products: parse_product_lines(&products()),
        };

        if let Err(e) = submission.validate() {
            status.set(FormStatus::Invalid(e.to_string()));
            return;
        }

        status.set(FormStatus::Sending);
        let notifier = storefront.webhook.clone();
        spawn(async move {
            if notifier.notify(&submission).await {
                status.set(FormStatus::Sent);
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                company.set(String::new());
                message.set(String::new());
                products.set(String::new());
            } else {
                status.set(FormStatus::Failed);
            }
        });
    };

    let is_quote = kind() == SubmissionKind::Quote;

    rsx! {
        section { class: "contact-page",
            h1 { class: "contact-title", if is_quote { "Pedí tu cotización" } else { "Contacto" } }

            div { class: "contact-kind",
                button {
                    r#type: "button",
                    class: if is_quote { "kind-tab" } else { "kind-tab active" },
                    onclick: move |_| kind.set(SubmissionKind::Contact),
                    "Consulta"
                }
                button {
                    r#type: "button",
                    class: if is_quote { "kind-tab active" } else { "kind-tab" },
                    onclick: move |_| kind.set(SubmissionKind::Quote),
                    "Cotización"
                }
            }

            form { class: "contact-form", onsubmit: submit,
                label { "Nombre"
                    input { r#type: "text", value: "{name}", oninput: move |evt| name.set(evt.value()) }
                }
                label { "Email"
                    input { r#type: "email", value: "{email}", oninput: move |evt| email.set(evt.value()) }
                }
                label { "Teléfono"
                    input { r#type: "tel", value: "{phone}", oninput: move |evt| phone.set(evt.value()) }
                }
                label { "Empresa / taller"
                    input { r#type: "text", value: "{company}", oninput: move |evt| company.set(evt.value()) }
                }
                if is_quote {
                    label { "Productos (uno por línea)"
                        textarea { rows: "4", value: "{products}", oninput: move |evt| products.set(evt.value()) }
                    }
                }
                label { if is_quote { "Comentarios" } else { "Mensaje" }
                    textarea { rows: "5", value: "{message}", oninput: move |evt| message.set(evt.value()) }
                }

                button {
                    r#type: "submit",
                    class: "btn-primary",
                    disabled: status() == FormStatus::Sending,
                    if status() == FormStatus::Sending { "Enviando…" } else { "Enviar" }
                }

                {match status() {
                    FormStatus::Idle | FormStatus::Sending => rsx! {},
                    FormStatus::Sent => rsx! {
                        p { class: "form-status success", "¡Gracias! Te responderemos a la brevedad." }
                    },
                    FormStatus::Invalid(reason) => rsx! {
                        p { class: "form-status error", "{reason}" }
                    },
                    FormStatus::Failed => rsx! {
                        p { class: "form-status error", "No pudimos enviar el formulario. Probá de nuevo más tarde." }
                    },
                }}
            }
        }
    }
}
