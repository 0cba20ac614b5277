// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pager --heading-base-level=0

//! Understory Pager: headless three-slot horizontal paging.
//!
//! This crate implements lazy, bidirectional paging over a sequence of
//! content items whose length need not be known. At most three items are
//! live at a time, placed into the [`Slot::Left`], [`Slot::Center`] and
//! [`Slot::Right`] regions of a scroll surface. When a scroll gesture comes to
//! rest past a page boundary the window shifts by one item, the vacated edge
//! is refilled from the [`ContentSource`], and a [`PagingDelegate`] is told
//! which item was left and which was reached.
//!
//! The core concepts are:
//!
//! - [`Window`]: a fixed arena of three optional item handles.
//! - [`FocusPosition`]: which slot holds the focused item. `Left` and `Right`
//!   are used at the ends of the sequence; `Middle` is the steady state.
//! - [`SlotLayout`] and [`PageGeometry`]: the slot rectangles, scroll content
//!   size, page padding and surface frame.
//! - [`Pager`]: the engine. It borrows a [`ContentSource`], a
//!   [`PagingDelegate`] and a [`Viewport`] for the life of a paging session.
//!
//! This crate does **not** render, lay out items, or animate. Host frameworks
//! are responsible for:
//!
//! - Owning the scroll surface and the item views.
//! - Implementing [`Viewport::attach`] / [`Viewport::detach`] to move item
//!   views between slot containers.
//! - Calling [`Pager::run_deferred`] on the UI turn after setup, and forwarding
//!   scroll and deceleration-end events.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_pager::{
//!     ContentSource, FocusPosition, Pager, PagerConfig, Slot, Transition, Viewport,
//! };
//!
//! // Items are page numbers `0..len`.
//! struct Pages(u32);
//!
//! impl ContentSource<u32> for Pages {
//!     fn predecessor(&self, item: &u32) -> Option<u32> {
//!         item.checked_sub(1)
//!     }
//!
//!     fn successor(&self, item: &u32) -> Option<u32> {
//!         (item + 1 < self.0).then_some(item + 1)
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Surface {
//!     offset: f64,
//! }
//!
//! impl Viewport<u32> for Surface {
//!     fn frame_size(&self) -> Size {
//!         Size::new(100.0, 200.0)
//!     }
//!     fn content_offset_x(&self) -> f64 {
//!         self.offset
//!     }
//!     fn set_content_size(&mut self, _size: Size) {}
//!     fn scroll_to(&mut self, rect: Rect) {
//!         self.offset = rect.x0;
//!     }
//!     fn attach(&mut self, _slot: Slot, _item: &u32) {}
//!     fn detach(&mut self, _slot: Slot, _item: &u32) {}
//! }
//!
//! let pages = Pages(50);
//! let mut delegate = ();
//! let mut surface = Surface::default();
//! let mut pager = Pager::new(PagerConfig::default(), &pages, &mut delegate, &mut surface);
//!
//! pager.setup(0);
//! pager.run_deferred();
//! assert_eq!(pager.focus_position(), FocusPosition::Left);
//!
//! // The user swipes one page forward.
//! pager.viewport_mut().offset = 100.0;
//! pager.did_end_decelerating();
//! assert_eq!(pager.focused_item(), Some(&1));
//!
//! // And once more: the window slides and page 3 is fetched.
//! pager.viewport_mut().offset = 200.0;
//! assert_eq!(pager.did_end_decelerating(), Transition::ShiftedForward);
//! assert_eq!(pager.item(Slot::Right), Some(&3));
//! assert_eq!(pager.focused_item(), Some(&2));
//! ```
//!
//! ## Window shape at the ends
//!
//! When the seed has no predecessor the window extends two items forward and
//! focus starts on the left; when it has no successor the window extends
//! backward and focus starts on the right. When the seed is last and has at
//! least two predecessors, the default [`TailPadding::Duplicate`] policy places
//! the second predecessor in both the left and center slots;
//! [`TailPadding::Adjacent`] fills them in sequence order instead.
//!
//! Running out of content is never an error: a missing predecessor or
//! successor simply leaves focus at the edge. Driving the pager before
//! [`Pager::setup`] is a caller bug and panics.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod assembly;
mod config;
mod contract;
mod layout;
mod pager;
mod slot;
mod transition;

pub use assembly::{Assembly, assemble};
pub use config::{PagerConfig, TailPadding};
pub use contract::{ContentSource, PagingDelegate, Viewport};
pub use layout::{PageGeometry, SlotLayout};
pub use pager::Pager;
pub use slot::{Slot, Window};
pub use transition::{Crossing, FocusPosition, Landing, Transition, classify};
