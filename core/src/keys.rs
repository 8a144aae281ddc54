//! Functional keys drawn at the right edge of the grid.

/// One control key per grid row, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionalKey {
    /// Delete the last character (handled by the host)
    Backspace,
    /// Commit the current input (handled by the host)
    Enter,
    /// Show the previous page of candidates
    PageUp,
    /// Show the next page of candidates
    PageDown,
}

impl FunctionalKey {
    /// All keys in row order.
    pub const ALL: [FunctionalKey; 4] = [
        FunctionalKey::Backspace,
        FunctionalKey::Enter,
        FunctionalKey::PageUp,
        FunctionalKey::PageDown,
    ];

    /// The grid row this key sits beside.
    pub fn row(self) -> usize {
        match self {
            FunctionalKey::Backspace => 0,
            FunctionalKey::Enter => 1,
            FunctionalKey::PageUp => 2,
            FunctionalKey::PageDown => 3,
        }
    }

    /// The key beside a grid row, if that row has one.
    pub fn for_row(row: usize) -> Option<Self> {
        Self::ALL.get(row).copied()
    }

    /// Whether the view handles this key itself rather than the host.
    pub fn is_paging(self) -> bool {
        matches!(self, FunctionalKey::PageUp | FunctionalKey::PageDown)
    }

    pub fn label(self) -> &'static str {
        match self {
            FunctionalKey::Backspace => "⌫",
            FunctionalKey::Enter => "⏎",
            FunctionalKey::PageUp => "▲",
            FunctionalKey::PageDown => "▼",
        }
    }
}

/// Result of pressing a functional key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// The view changed page
    Handled,
    /// A paging key at a boundary; nothing changed
    Ignored,
    /// Not a view key (pass through to the host)
    Forward(FunctionalKey),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_mapping_roundtrips() {
        for key in FunctionalKey::ALL {
            assert_eq!(FunctionalKey::for_row(key.row()), Some(key));
        }
        assert_eq!(FunctionalKey::for_row(4), None);
    }

    #[test]
    fn test_paging_keys() {
        assert!(FunctionalKey::PageUp.is_paging());
        assert!(FunctionalKey::PageDown.is_paging());
        assert!(!FunctionalKey::Backspace.is_paging());
        assert!(!FunctionalKey::Enter.is_paging());
    }
}
