//! Pointer (mouse) buttons.

/// Pointer button codes.
#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Button {
    /// Primary (usually left) button.
    #[default]
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button.
    Middle,
}

impl Button {
    /// All tracked buttons.
    pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary, Self::Middle];

    /// Slot index used for per-button state arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
            Self::Middle => 2,
        }
    }
}
