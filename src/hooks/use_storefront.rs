use dioxus::prelude::*;

use crate::catalog_client::CatalogClient;
use crate::config::StorefrontConfig;
use crate::webhook::WebhookNotifier;

/// Everything the pages need to reach the outside world, shared through context
#[derive(Clone)]
pub struct Storefront {
    pub config: StorefrontConfig,
    pub catalog: CatalogClient,
    pub webhook: WebhookNotifier,
}

impl Storefront {
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CatalogClient::new(config.backend_url.clone(), config.backend_anon_key.clone());
        let webhook = WebhookNotifier::new(config.webhook_url.clone());
        Self {
            config,
            catalog,
            webhook,
        }
    }
}

pub fn use_storefront() -> Storefront {
    use_context::<Storefront>()
}
