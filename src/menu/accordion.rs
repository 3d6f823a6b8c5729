use super::ExpandableMenu;

/// Mobile accordion: the toggle flips it, choosing a link collapses it.
/// No outside-click handling; the surrounding overlay is dismissible on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TapAccordion {
    expanded: bool,
}

impl TapAccordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

impl ExpandableMenu for TapAccordion {
    fn is_open(&self) -> bool {
        self.expanded
    }

    fn collapse(&mut self) {
        self.expanded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        assert!(!TapAccordion::new().is_open());
    }

    #[test]
    fn test_two_taps_restore_collapsed() {
        let mut menu = TapAccordion::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert_eq!(menu, TapAccordion::new());
    }

    #[test]
    fn test_select_link_collapses_and_notifies_once() {
        let mut menu = TapAccordion::new();
        menu.toggle();

        let mut notified = 0;
        menu.select_link(Some(|| notified += 1));

        assert_eq!(notified, 1);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_select_link_while_collapsed_still_notifies() {
        let mut menu = TapAccordion::new();
        let mut notified = 0;
        menu.select_link(Some(|| notified += 1));
        assert_eq!(notified, 1);
        assert!(!menu.is_open());
    }
}
