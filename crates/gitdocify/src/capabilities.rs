//! Panel capability system
//!
//! Views declare what kind of input they take. The keyboard middleware
//! routes keys by these flags before it looks at the keymap, so a text
//! field receives `j` as a character instead of "next item".

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PanelCapabilities: u32 {
        /// Next/previous item navigation (arrows, j/k)
        const ITEM_NAVIGATION = 1 << 0;

        /// Printable keys are typed into a field
        const TEXT_INPUT = 1 << 1;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let caps = PanelCapabilities::default();
        assert!(!caps.accepts_text_input());
        assert!(!caps.supports_item_navigation());
    }

    #[test]
    fn test_flags_are_independent() {
        let form = PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION;
        assert!(form.accepts_text_input());
        assert!(form.supports_item_navigation());
        assert!(!PanelCapabilities::ITEM_NAVIGATION.accepts_text_input());
    }
}
