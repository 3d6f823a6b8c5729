pub mod use_catalog;
pub mod use_debounced;
pub mod use_storefront;

pub use use_catalog::{use_catalog_state, use_categories, use_products, CatalogState, RemoteData};
pub use use_debounced::use_debounced;
pub use use_storefront::{use_storefront, Storefront};
