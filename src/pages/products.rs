use dioxus::prelude::*;
use crate::catalog::{find_by_slug, CatalogTarget};
use crate::hooks::{use_catalog_state, use_debounced, use_products, RemoteData};
use crate::types::Product;

const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Products whose name contains `query`, ignoring case and surrounding
/// whitespace. A blank query keeps every product.
pub fn filter_products_by_name(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[component]
pub fn Products(categoria: ReadOnlySignal<String>) -> Element {
    let catalog = use_catalog_state();
    let products = use_products(categoria, catalog);
    let mut search = use_signal(String::new);
    let query = use_debounced(search, SEARCH_DEBOUNCE_MS);

    // Heading follows the filter; falls back to the raw slug until categories load
    let heading = match CatalogTarget::from_query(&categoria.read()) {
        CatalogTarget::All => "Todos los productos".to_string(),
        CatalogTarget::Category(slug) => catalog
            .all
            .read()
            .loaded()
            .and_then(|categories| find_by_slug(categories, &slug).map(|c| c.name.clone()))
            .unwrap_or(slug),
    };

    let body = match &*products.read_unchecked() {
        None | Some(RemoteData::Loading) => rsx! {
            p { class: "catalog-status", "Cargando productos…" }
        },
        Some(RemoteData::Failed(error)) => rsx! {
            p { class: "catalog-status catalog-error", "No pudimos cargar el catálogo: {error}" }
        },
        Some(RemoteData::Loaded(items)) if items.is_empty() => rsx! {
            p { class: "catalog-status", "No hay productos en esta categoría." }
        },
        Some(RemoteData::Loaded(items)) => {
            let query = query();
            let matching = filter_products_by_name(items, &query);
            if matching.is_empty() {
                let needle = query.trim().to_string();
                rsx! {
                    p { class: "catalog-status", "Ningún producto coincide con \"{needle}\"." }
                }
            } else {
                rsx! {
                    div { class: "product-grid",
                        for product in matching {
                            ProductCard { key: "{product.id}", product: product.clone() }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "catalog-page",
            div { class: "catalog-header",
                h1 { class: "catalog-title", "{heading}" }
                input {
                    class: "catalog-search",
                    r#type: "search",
                    placeholder: "Buscar productos…",
                    "aria-label": "Buscar productos",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }
            {body}
        }
    }
}

#[component]
fn ProductCard(product: Product) -> Element {
    rsx! {
        article { class: "product-card",
            if let Some(image) = product.image_url.as_deref() {
                img { class: "product-image", src: "{image}", alt: "{product.name}" }
            }
            div { class: "product-body",
                h3 { class: "product-name", "{product.name}" }
                if let Some(description) = product.description.as_deref() {
                    p { class: "product-description", "{description}" }
                }
                p { class: "product-price", {product.price_label()} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            price: None,
            unit: None,
            image_url: None,
            category_id: None,
        }
    }

    fn stock() -> Vec<Product> {
        vec![
            product("p1", "Hilo poliéster"),
            product("p2", "Lino crudo"),
            product("p3", "Hilo de algodón"),
        ]
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        assert_eq!(filter_products_by_name(&stock(), "").len(), 3);
        assert_eq!(filter_products_by_name(&stock(), "   ").len(), 3);
    }

    #[test]
    fn test_query_matches_name_ignoring_case() {
        let ids: Vec<String> = filter_products_by_name(&stock(), "  HILO ")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["p1", "p3"]);
    }

    #[test]
    fn test_accented_query() {
        let found = filter_products_by_name(&stock(), "ALGODÓN");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Hilo de algodón");
    }

    #[test]
    fn test_no_match() {
        assert!(filter_products_by_name(&stock(), "seda").is_empty());
    }
}
