use serde::{Deserialize, Serialize};

// Catalog Types
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<String>, // None for top-level categories
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            parent_id: None,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>, // e.g. "metro", "rollo"
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
}

impl Product {
    /// Price label shown on product cards; products without a price are quoted on request.
    pub fn price_label(&self) -> String {
        match (self.price, self.unit.as_deref()) {
            (Some(price), Some(unit)) => format!("${:.2} / {}", price, unit),
            (Some(price), None) => format!("${:.2}", price),
            (None, _) => "Precio a cotizar".to_string(),
        }
    }
}
