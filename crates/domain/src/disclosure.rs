//! Expand/collapse state of the shipment details card.

use std::fmt;

/// Whether a collapsible section is showing its body.
///
/// Starts [`Expanded`](Self::Expanded); the only transition is
/// [`toggle`](Self::toggle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Expanded,
    Collapsed,
}

impl Disclosure {
    /// Flip to the other state.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Rotation of the chevron indicator, in degrees.
    #[must_use]
    pub fn chevron_rotation(self) -> u16 {
        match self {
            Self::Expanded => 180,
            Self::Collapsed => 0,
        }
    }
}

impl fmt::Display for Disclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expanded => f.write_str("expanded"),
            Self::Collapsed => f.write_str("collapsed"),
        }
    }
}
