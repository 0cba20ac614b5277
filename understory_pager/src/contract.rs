// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits a host implements to drive a [`Pager`](crate::Pager).
//!
//! None of these calls may re-enter the pager. The pager holds exclusive
//! borrows of the delegate and viewport for the whole session, so this is
//! checked by the borrow checker rather than at runtime.

use kurbo::{Rect, Size};

use crate::slot::Slot;

/// Adjacency oracle over an externally ordered sequence.
///
/// Both queries must return the same answer for the same item for as long as
/// a pager session lasts; the pager may ask more than once.
pub trait ContentSource<T> {
    /// The item immediately before `item`, or `None` if `item` is first.
    fn predecessor(&self, item: &T) -> Option<T>;

    /// The item immediately after `item`, or `None` if `item` is last.
    fn successor(&self, item: &T) -> Option<T>;
}

/// Observer of page transitions.
///
/// Notifications are purely informational and cannot influence pager state.
pub trait PagingDelegate<T> {
    /// The user is about to leave `item`.
    fn will_leave(&mut self, item: &T) {
        let _ = item;
    }

    /// The pager finished moving onto `to`, coming from `from`.
    fn arrived(&mut self, to: &T, from: &T) {
        let _ = (to, from);
    }

    /// The viewport scrolled. Hosts may coalesce these at a high rate.
    fn scrolling(&mut self) {}
}

/// A delegate that ignores every notification.
impl<T> PagingDelegate<T> for () {}

/// Host-side scroll surface holding the three slot containers.
///
/// The surface has a fixed page-sized frame and scrolls horizontally over
/// content sized by the pager.
pub trait Viewport<T> {
    /// Frame size of the scroll surface. Its width is one page width.
    fn frame_size(&self) -> Size;

    /// Current horizontal content offset, read after each scroll end.
    fn content_offset_x(&self) -> f64;

    /// Whether the user is currently dragging the surface.
    fn is_dragging(&self) -> bool {
        false
    }

    /// Sets the total scrollable content size.
    fn set_content_size(&mut self, size: Size);

    /// Makes `rect` (in content coordinates) visible without animation.
    fn scroll_to(&mut self, rect: Rect);

    /// Places `item` into the container for `slot` and begins its appearance.
    fn attach(&mut self, slot: Slot, item: &T);

    /// Removes `item` from the container for `slot`.
    fn detach(&mut self, slot: Slot, item: &T);
}
