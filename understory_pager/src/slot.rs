// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three-cell window of live pages.
//!
//! A [`Window`] is a fixed arena of exactly three cells addressed by [`Slot`].
//! It never grows: moving through the sequence shifts handles between cells
//! and refills the vacated edge, so memory stays constant however long the
//! underlying sequence is.

/// One of the three fixed placement regions of a pager.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The leftmost region, at content offset `0`.
    Left,
    /// The middle region, one page width in.
    Center,
    /// The rightmost region, two page widths in.
    Right,
}

impl Slot {
    /// All slots in left-to-right order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    /// Returns the zero-based position of this slot from the left.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Right => 2,
        }
    }
}

/// Three optional item handles, one per [`Slot`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window<T> {
    cells: [Option<T>; 3],
}

impl<T> Default for Window<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Window<T> {
    /// Creates an empty window.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None, None, None],
        }
    }

    /// Creates a window from explicit cell contents.
    #[must_use]
    pub fn from_cells(left: Option<T>, center: Option<T>, right: Option<T>) -> Self {
        Self {
            cells: [left, center, right],
        }
    }

    /// Returns the item in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&T> {
        self.cells[slot.index()].as_ref()
    }

    /// Returns the item in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if the slot is empty. The pager only calls this for slots its
    /// focus position guarantees are populated.
    #[must_use]
    pub fn occupied(&self, slot: Slot) -> &T {
        match self.get(slot) {
            Some(item) => item,
            None => panic!("pager slot {slot:?} is empty but the focus position requires it"),
        }
    }

    /// Returns `true` if `slot` holds an item.
    #[must_use]
    pub fn is_populated(&self, slot: Slot) -> bool {
        self.cells[slot.index()].is_some()
    }

    /// Number of populated cells.
    #[must_use]
    pub fn populated(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` when no cell holds an item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.populated() == 0
    }

    /// Iterates over populated cells in left-to-right order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &T)> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|item| (slot, item)))
    }

    /// Empties every cell, returning the previous contents.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Shifts every handle one cell to the left and places `next` on the right.
    ///
    /// Returns the handle that fell off the left edge.
    pub fn shift_forward(&mut self, next: T) -> Option<T> {
        let [left, center, right] = &mut self.cells;
        let evicted = left.take();
        *left = center.take();
        *center = right.take();
        *right = Some(next);
        evicted
    }

    /// Shifts every handle one cell to the right and places `prev` on the left.
    ///
    /// Returns the handle that fell off the right edge.
    pub fn shift_backward(&mut self, prev: T) -> Option<T> {
        let [left, center, right] = &mut self.cells;
        let evicted = right.take();
        *right = center.take();
        *center = left.take();
        *left = Some(prev);
        evicted
    }
}
