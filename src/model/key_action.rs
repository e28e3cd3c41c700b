//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the active list up by one row. Default: k/↑
    ScrollUp,
    /// Scroll the active list down by one row. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first item. Default: g/Home
    ScrollToTop,
    /// Jump to the last item. Default: G/End
    ScrollToBottom,

    // Tabs
    /// Switch to the next dataset tab. Default: Tab/]
    NextTab,
    /// Switch to the previous dataset tab. Default: Shift+Tab/[
    PrevTab,
    /// Select a tab by its 1-based number. Default: 1-4
    SelectTab(usize),

    // Record count
    /// Double the generated record count. Default: +
    IncreaseCount,
    /// Halve the generated record count. Default: -
    DecreaseCount,

    // Product rows
    /// Select the next product. Default: n
    SelectNext,
    /// Select the previous product. Default: p
    SelectPrev,
    /// Edit the selected product. Default: e
    EditItem,
    /// Delete the selected product. Default: d
    DeleteItem,

    // Application
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action only moves the scroll position.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            Self::ScrollUp
                | Self::ScrollDown
                | Self::PageUp
                | Self::PageDown
                | Self::ScrollToTop
                | Self::ScrollToBottom
        )
    }

    /// Whether this action acts on the product selection.
    pub fn is_item(self) -> bool {
        matches!(
            self,
            Self::SelectNext | Self::SelectPrev | Self::EditItem | Self::DeleteItem
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_actions_are_classified() {
        assert!(KeyAction::ScrollUp.is_scroll());
        assert!(KeyAction::PageDown.is_scroll());
        assert!(KeyAction::ScrollToBottom.is_scroll());
    }

    #[test]
    fn non_scroll_actions_are_not_classified_as_scroll() {
        assert!(!KeyAction::NextTab.is_scroll());
        assert!(!KeyAction::SelectTab(2).is_scroll());
        assert!(!KeyAction::IncreaseCount.is_scroll());
        assert!(!KeyAction::Quit.is_scroll());
    }

    #[test]
    fn item_actions_are_classified() {
        assert!(KeyAction::SelectNext.is_item());
        assert!(KeyAction::DeleteItem.is_item());
        assert!(!KeyAction::DeleteItem.is_scroll());
        assert!(!KeyAction::ScrollDown.is_item());
    }

    #[test]
    fn select_tab_discriminates_by_number() {
        assert_ne!(KeyAction::SelectTab(1), KeyAction::SelectTab(2));
        assert_eq!(KeyAction::SelectTab(3), KeyAction::SelectTab(3));
    }
}
