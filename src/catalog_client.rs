use crate::error::{ClientError, ClientResult};
use crate::types::*;

const CATEGORY_COLUMNS: &str = "id,name,slug,parent_id";

/// Client for the hosted backend's REST interface (categories and products)
#[derive(Clone)]
pub struct CatalogClient {
    base_url: String,
    anon_key: String,
    client: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Query pairs for the category listing
    pub fn categories_query() -> Vec<(&'static str, String)> {
        vec![
            ("select", CATEGORY_COLUMNS.to_string()),
            ("order", "name.asc".to_string()),
        ]
    }

    /// Query pairs for the product listing. `category_id` is opaque and is
    /// percent-encoded by the request builder, never spliced into the URL.
    pub fn products_query(category_id: Option<&str>) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("select", "*".to_string()),
            ("order", "name.asc".to_string()),
        ];
        if let Some(id) = category_id {
            query.push(("category_id", format!("eq.{}", id)));
        }
        query
    }

    /// Fetch every category, nested ones included
    pub async fn fetch_categories(&self) -> ClientResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .get_json("categories", &Self::categories_query())
            .await?;
        tracing::info!("Loaded {} categories", categories.len());
        Ok(categories)
    }

    /// Fetch products, optionally restricted to one category
    pub async fn fetch_products(&self, category_id: Option<&str>) -> ClientResult<Vec<Product>> {
        let products: Vec<Product> = self
            .get_json("products", &Self::products_query(category_id))
            .await?;
        tracing::info!("Loaded {} products", products.len());
        Ok(products)
    }

    fn request(&self, table: &str, query: &[(&str, String)]) -> reqwest::RequestBuilder {
        self.client
            .get(self.endpoint(table))
            .query(query)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        tracing::debug!("Fetching {} with {:?}", table, query);
        let response = self.request(table, query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::warn!("Backend returned {}: {}", status, error_text);
            return Err(ClientError::ApiError(error_text));
        }

        let result = response.json().await?;
        Ok(result)
    }
}
