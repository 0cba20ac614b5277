// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building the initial window around a seed item.

use crate::config::TailPadding;
use crate::contract::ContentSource;
use crate::slot::Window;
use crate::transition::FocusPosition;

/// The window and focus produced by [`assemble`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assembly<T> {
    /// Slot contents.
    pub window: Window<T>,
    /// Focus position for the seed.
    pub focus: FocusPosition,
}

/// Builds the initial window around `seed`.
///
/// The window is always as wide as the available content allows in the
/// direction that has more content, and never queries past either end:
///
/// - interior seed: `[before, seed, after]`, focus in the middle;
/// - last item: `[before2, before2, seed]` (or `[before2, before, seed]` with
///   [`TailPadding::Adjacent`]), or `[before, seed]` when only one item
///   precedes it; focus on the right;
/// - first item: `[seed, after, after2]` or `[seed, after]`; focus on the left;
/// - lone item: `[seed]`; focus on the left.
pub fn assemble<T, S>(seed: T, source: &S, tail_padding: TailPadding) -> Assembly<T>
where
    T: Clone,
    S: ContentSource<T> + ?Sized,
{
    let before = source.predecessor(&seed);
    let after = source.successor(&seed);

    let (window, focus) = match (before, after) {
        (Some(before), Some(after)) => (
            Window::from_cells(Some(before), Some(seed), Some(after)),
            FocusPosition::Middle,
        ),
        (Some(before), None) => {
            let window = match source.predecessor(&before) {
                Some(before2) => match tail_padding {
                    TailPadding::Duplicate => {
                        Window::from_cells(Some(before2.clone()), Some(before2), Some(seed))
                    }
                    TailPadding::Adjacent => {
                        Window::from_cells(Some(before2), Some(before), Some(seed))
                    }
                },
                None => Window::from_cells(Some(before), Some(seed), None),
            };
            (window, FocusPosition::Right)
        }
        (None, Some(after)) => {
            let after2 = source.successor(&after);
            (
                Window::from_cells(Some(seed), Some(after), after2),
                FocusPosition::Left,
            )
        }
        (None, None) => (Window::from_cells(Some(seed), None, None), FocusPosition::Left),
    };

    Assembly { window, focus }
}
