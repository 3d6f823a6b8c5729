use dioxus::prelude::*;

use crate::catalog::{find_by_slug, top_level_categories, CatalogTarget};
use crate::hooks::use_storefront::use_storefront;
use crate::types::{Category, Product};

#[derive(Clone, Debug, PartialEq)]
pub enum RemoteData<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> RemoteData<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            RemoteData::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct CatalogState {
    /// Every category the backend knows, nested ones included
    pub all: Signal<RemoteData<Vec<Category>>>,
    /// Top-level subset, in backend order; what the navigation renders
    pub top_level: Memo<Vec<Category>>,
}

/// Loads categories once per mount. Failures leave the menu with only "Ver Todo".
pub fn use_categories() -> CatalogState {
    let storefront = use_storefront();
    let mut all = use_signal(|| RemoteData::Loading);

    use_future(move || {
        let client = storefront.catalog.clone();
        async move {
            match client.fetch_categories().await {
                Ok(categories) => all.set(RemoteData::Loaded(categories)),
                Err(e) => {
                    tracing::warn!("Failed to load categories: {}", e);
                    all.set(RemoteData::Failed(e.to_string()));
                }
            }
        }
    });

    let top_level = use_memo(move || {
        all.read()
            .loaded()
            .map(|categories| top_level_categories(categories))
            .unwrap_or_default()
    });

    CatalogState { all, top_level }
}

/// Products for the `categoria` query value.
///
/// A category filter waits for `catalog` to load so the slug can be resolved to
/// an id; the resource reruns when either the query or the categories change.
pub fn use_products(
    categoria: ReadOnlySignal<String>,
    catalog: CatalogState,
) -> Resource<RemoteData<Vec<Product>>> {
    let storefront = use_storefront();

    use_resource(move || {
        let client = storefront.catalog.clone();
        let filter = match CatalogTarget::from_query(&categoria.read()) {
            CatalogTarget::All => Ok(None),
            CatalogTarget::Category(slug) => match &*catalog.all.read() {
                RemoteData::Loading => Err(RemoteData::Loading),
                RemoteData::Failed(error) => Err(RemoteData::Failed(error.clone())),
                RemoteData::Loaded(categories) => match find_by_slug(categories, &slug) {
                    Some(category) => Ok(Some(category.id.clone())),
                    None => {
                        tracing::info!("No category with slug '{}'", slug);
                        Err(RemoteData::Loaded(Vec::new()))
                    }
                },
            },
        };

        async move {
            let category_id = match filter {
                Ok(category_id) => category_id,
                Err(settled) => return settled,
            };

            match client.fetch_products(category_id.as_deref()).await {
                Ok(products) => RemoteData::Loaded(products),
                Err(e) => {
                    tracing::warn!("Failed to load products: {}", e);
                    RemoteData::Failed(e.to_string())
                }
            }
        }
    })
}

/// Catalog state provided by `SiteLayout`
pub fn use_catalog_state() -> CatalogState {
    use_context::<CatalogState>()
}
