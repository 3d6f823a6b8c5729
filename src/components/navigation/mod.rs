pub mod catalog_navigation;
pub mod outside_click;

pub use catalog_navigation::CatalogNavigation;
pub use outside_click::DocumentPointerHost;
