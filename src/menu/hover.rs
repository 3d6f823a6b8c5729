use super::listener::{ListenerGuard, ListenerHost};
use super::ExpandableMenu;

/// Where a document-level pointer-down landed relative to the menu root
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
}

impl PointerTarget {
    /// `root_contains` is `None` while the menu root is not mounted yet. Such a
    /// press cannot be inside the menu, so it counts as `Outside`.
    pub fn from_containment(root_contains: Option<bool>) -> Self {
        match root_contains {
            Some(true) => PointerTarget::Inside,
            Some(false) | None => PointerTarget::Outside,
        }
    }
}

enum HoverState<G> {
    Closed,
    Open(G),
}

/// Desktop dropdown: opens on pointer-enter, closes on pointer-leave,
/// outside pointer-down, or link selection.
///
/// The `Open` state owns the outside-click listener, so every way out of
/// `Open` (including dropping the dropdown) detaches it.
pub struct HoverDropdown<H: ListenerHost> {
    state: HoverState<ListenerGuard<H>>,
}

impl<H: ListenerHost> HoverDropdown<H> {
    pub fn new() -> Self {
        Self {
            state: HoverState::Closed,
        }
    }

    pub fn pointer_enter(&mut self, host: &H) {
        if let HoverState::Closed = self.state {
            self.state = HoverState::Open(ListenerGuard::attach(host));
        }
    }

    pub fn pointer_leave(&mut self) {
        self.close();
    }

    pub fn pointer_down(&mut self, target: PointerTarget) {
        if target == PointerTarget::Outside {
            self.close();
        }
    }

    pub fn close(&mut self) {
        self.state = HoverState::Closed;
    }
}

impl<H: ListenerHost> Default for HoverDropdown<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ListenerHost> ExpandableMenu for HoverDropdown<H> {
    fn is_open(&self) -> bool {
        matches!(self.state, HoverState::Open(_))
    }

    fn collapse(&mut self) {
        self.close();
    }
}
