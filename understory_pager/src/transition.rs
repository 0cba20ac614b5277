// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus positions and scroll-end classification.

use crate::slot::{Slot, Window};

/// Which slot of the window currently holds the focused item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusPosition {
    /// Focus is on the left slot; there is nothing before it in the window.
    #[default]
    Left,
    /// Focus is on the center slot with a live page on either side.
    Middle,
    /// Focus is on the last populated slot; there is nothing after it.
    Right,
}

impl FocusPosition {
    /// Resolves this position to a slot of `window`.
    ///
    /// `Right` resolves to the right slot when it is populated and to the
    /// center slot otherwise, which covers two-page windows.
    #[must_use]
    pub fn slot<T>(self, window: &Window<T>) -> Slot {
        match self {
            Self::Left => Slot::Left,
            Self::Middle => Slot::Center,
            Self::Right if window.is_populated(Slot::Right) => Slot::Right,
            Self::Right => Slot::Center,
        }
    }
}

/// Direction a finished scroll gesture moved relative to the focused page.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crossing {
    /// The gesture ended past the focused page toward later items.
    Forward,
    /// The gesture ended before the focused page toward earlier items.
    Backward,
    /// The gesture did not cross a page boundary.
    Rest,
}

/// Where a scroll end landed relative to one page width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Landing {
    /// Offset below one page width.
    Before,
    /// Offset equal to one page width, within tolerance.
    AtPage,
    /// Offset beyond one page width.
    Beyond,
}

impl Landing {
    /// Compares a final offset `x` against the page width `width`.
    #[must_use]
    pub fn of(x: f64, width: f64, tolerance: f64) -> Self {
        if (x - width).abs() <= tolerance {
            Self::AtPage
        } else if x < width {
            Self::Before
        } else {
            Self::Beyond
        }
    }
}

/// Classifies a landing for the current focus.
///
/// Landing exactly one page in is a forward move from the left slot and a
/// backward move from the right slot; from the middle it is a rest.
#[must_use]
pub fn classify(focus: FocusPosition, landing: Landing) -> Crossing {
    match (focus, landing) {
        (FocusPosition::Right, Landing::Beyond) => Crossing::Rest,
        (_, Landing::Beyond) | (FocusPosition::Left, Landing::AtPage) => Crossing::Forward,
        (_, Landing::Before) | (FocusPosition::Right, Landing::AtPage) => Crossing::Backward,
        (FocusPosition::Middle, Landing::AtPage) => Crossing::Rest,
    }
}

/// What a scroll end did to the pager.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed; the gesture ran into a boundary.
    None,
    /// The viewport was snapped back to the focused slot.
    Recentered,
    /// Focus moved to another slot without changing slot contents.
    Refocused {
        /// Focus before the scroll end.
        from: FocusPosition,
        /// Focus after the scroll end.
        to: FocusPosition,
    },
    /// The window slid one item toward the end of the sequence.
    ShiftedForward,
    /// The window slid one item toward the start of the sequence.
    ShiftedBackward,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_uses_tolerance_around_page_width() {
        assert_eq!(Landing::of(100.2, 100.0, 0.5), Landing::AtPage);
        assert_eq!(Landing::of(99.0, 100.0, 0.5), Landing::Before);
        assert_eq!(Landing::of(200.0, 100.0, 0.5), Landing::Beyond);
        assert_eq!(Landing::of(100.0, 100.0, 0.0), Landing::AtPage);
    }

    #[test]
    fn page_width_landing_depends_on_focus() {
        assert_eq!(
            classify(FocusPosition::Left, Landing::AtPage),
            Crossing::Forward
        );
        assert_eq!(
            classify(FocusPosition::Middle, Landing::AtPage),
            Crossing::Rest
        );
        assert_eq!(
            classify(FocusPosition::Right, Landing::AtPage),
            Crossing::Backward
        );
    }

    #[test]
    fn right_focus_never_crosses_forward() {
        assert_eq!(
            classify(FocusPosition::Right, Landing::Beyond),
            Crossing::Rest
        );
        assert_eq!(
            classify(FocusPosition::Middle, Landing::Beyond),
            Crossing::Forward
        );
        assert_eq!(
            classify(FocusPosition::Left, Landing::Before),
            Crossing::Backward
        );
    }

    #[test]
    fn right_focus_resolves_to_last_populated_slot() {
        let two = Window::from_cells(Some(1), Some(2), None);
        let three = Window::from_cells(Some(1), Some(2), Some(3));
        assert_eq!(FocusPosition::Right.slot(&two), Slot::Center);
        assert_eq!(FocusPosition::Right.slot(&three), Slot::Right);
        assert_eq!(FocusPosition::Middle.slot(&three), Slot::Center);
        assert_eq!(FocusPosition::Left.slot(&two), Slot::Left);
    }
}
