//! Open/closed state machines behind the catalog navigation.
//!
//! The desktop dropdown and the mobile accordion share the `ExpandableMenu`
//! contract but keep independent state. Only the desktop variant listens for
//! pointer activity outside its root, and it does so through a `ListenerGuard`
//! held by the `Open` state.

pub mod accordion;
pub mod hover;
pub mod listener;

pub use accordion::TapAccordion;
pub use hover::{HoverDropdown, PointerTarget};
pub use listener::{ListenerGuard, ListenerHost};

/// Which of the two menu behaviours a `CatalogNavigation` uses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuVariant {
    #[default]
    Desktop,
    Mobile,
}

impl MenuVariant {
    pub fn from_is_mobile(is_mobile: bool) -> Self {
        if is_mobile {
            MenuVariant::Mobile
        } else {
            MenuVariant::Desktop
        }
    }
}

pub trait ExpandableMenu {
    fn is_open(&self) -> bool;

    fn collapse(&mut self);

    /// A link was chosen: close, then let the enclosing container dismiss itself.
    fn select_link<F: FnOnce()>(&mut self, on_close: Option<F>) {
        self.collapse();
        if let Some(on_close) = on_close {
            on_close();
        }
    }
}
