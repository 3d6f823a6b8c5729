//! Catalog links and category helpers shared by the navigation and the products page.

use std::fmt;

use crate::types::Category;

pub const CATALOG_PATH: &str = "/productos";
pub const CATEGORY_QUERY_KEY: &str = "categoria";
pub const VIEW_ALL_LABEL: &str = "Ver Todo";

/// Where a catalog link navigates to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogTarget {
    All,
    Category(String), // slug, used verbatim
}

impl CatalogTarget {
    pub fn path(&self) -> String {
        match self {
            CatalogTarget::All => CATALOG_PATH.to_string(),
            CatalogTarget::Category(slug) => {
                format!("{}?{}={}", CATALOG_PATH, CATEGORY_QUERY_KEY, slug)
            }
        }
    }

    /// Inverse of the `categoria` query value the router hands to the products page.
    pub fn from_query(categoria: &str) -> Self {
        if categoria.is_empty() {
            CatalogTarget::All
        } else {
            CatalogTarget::Category(categoria.to_string())
        }
    }
}

impl fmt::Display for CatalogTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogLink {
    pub label: String,
    pub target: CatalogTarget,
}

impl CatalogLink {
    pub fn href(&self) -> String {
        self.target.path()
    }
}

/// "Ver Todo" first, then one link per category in the order given.
///
/// Input is rendered as-is: no parent filtering and no slug deduplication.
pub fn catalog_links(categories: &[Category]) -> Vec<CatalogLink> {
    let mut links = Vec::with_capacity(categories.len() + 1);
    links.push(CatalogLink {
        label: VIEW_ALL_LABEL.to_string(),
        target: CatalogTarget::All,
    });
    links.extend(categories.iter().map(|category| CatalogLink {
        label: category.name.clone(),
        target: CatalogTarget::Category(category.slug.clone()),
    }));
    links
}

pub fn top_level_categories(categories: &[Category]) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| c.is_top_level())
        .cloned()
        .collect()
}

pub fn find_by_slug<'a>(categories: &'a [Category], slug: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telas_and_hilos() -> Vec<Category> {
        vec![
            Category::new("1", "Telas", "telas"),
            Category::new("2", "Hilos", "hilos"),
        ]
    }

    #[test]
    fn test_empty_categories_render_only_view_all() {
        let links = catalog_links(&[]);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label, "Ver Todo");
        assert_eq!(links[0].href(), "/productos");
    }

    #[test]
    fn test_links_follow_input_order() {
        let links = catalog_links(&telas_and_hilos());
        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Ver Todo", "Telas", "Hilos"]);
        assert_eq!(links[2].href(), "/productos?categoria=hilos");
    }

    #[test]
    fn test_link_count_is_one_plus_categories() {
        for n in 0..12 {
            let categories: Vec<Category> = (0..n)
                .map(|i| Category::new(i.to_string(), format!("Cat {i}"), format!("cat-{i}")))
                .collect();
            assert_eq!(catalog_links(&categories).len(), n + 1);
        }
    }

    #[test]
    fn test_duplicate_slugs_are_kept() {
        let categories = vec![
            Category::new("1", "Telas", "telas"),
            Category::new("2", "Telas bis", "telas"),
        ];
        let links = catalog_links(&categories);
        assert_eq!(links.len(), 3);
        assert_eq!(links[1].href(), links[2].href());
    }

    #[test]
    fn test_nested_categories_are_rendered_when_passed_in() {
        let categories = vec![Category::new("3", "Lino", "lino").with_parent("1")];
        assert_eq!(catalog_links(&categories).len(), 2);
    }

    #[test]
    fn test_top_level_filter_preserves_order() {
        let categories = vec![
            Category::new("1", "Telas", "telas"),
            Category::new("3", "Lino", "lino").with_parent("1"),
            Category::new("2", "Hilos", "hilos"),
        ];
        let top = top_level_categories(&categories);
        let slugs: Vec<&str> = top.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, ["telas", "hilos"]);
    }

    #[test]
    fn test_target_from_query() {
        assert_eq!(CatalogTarget::from_query(""), CatalogTarget::All);
        assert_eq!(
            CatalogTarget::from_query("hilos"),
            CatalogTarget::Category("hilos".to_string())
        );
        assert_eq!(CatalogTarget::from_query("hilos").to_string(), "/productos?categoria=hilos");
    }

    #[test]
    fn test_find_by_slug() {
        let categories = telas_and_hilos();
        assert_eq!(find_by_slug(&categories, "hilos").map(|c| c.id.as_str()), Some("2"));
        assert!(find_by_slug(&categories, "botones").is_none());
    }
}
