// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paging engine.

use core::fmt;

use kurbo::{Rect, Size};

use crate::assembly::{Assembly, assemble};
use crate::config::PagerConfig;
use crate::contract::{ContentSource, PagingDelegate, Viewport};
use crate::layout::{PageGeometry, SlotLayout};
use crate::slot::{Slot, Window};
use crate::transition::{Crossing, FocusPosition, Landing, Transition, classify};

/// A paging session over borrowed collaborators.
///
/// The pager owns only the three-slot [`Window`], the [`FocusPosition`], and
/// the slot layout. The content source, delegate and viewport belong to the
/// host and are borrowed for as long as the session lives.
///
/// Typical host wiring:
///
/// 1. Call [`Pager::setup`] with a seed item once the viewport has its frame.
/// 2. On the next turn of the UI loop, call [`Pager::run_deferred`] to apply
///    the initial jump to the focused slot.
/// 3. Forward every scroll event to [`Pager::did_scroll`] and every
///    deceleration end to [`Pager::did_end_decelerating`].
pub struct Pager<'a, T, S: ?Sized, D: ?Sized, V: ?Sized> {
    config: PagerConfig,
    source: &'a S,
    delegate: &'a mut D,
    viewport: &'a mut V,
    window: Window<T>,
    focus: FocusPosition,
    layout: Option<SlotLayout>,
    pending_jump: Option<Rect>,
}

impl<T: fmt::Debug, S: ?Sized, D: ?Sized, V: ?Sized> fmt::Debug for Pager<'_, T, S, D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("config", &self.config)
            .field("window", &self.window)
            .field("focus", &self.focus)
            .field("layout", &self.layout)
            .field("pending_jump", &self.pending_jump)
            .finish_non_exhaustive()
    }
}

impl<'a, T, S, D, V> Pager<'a, T, S, D, V>
where
    T: Clone,
    S: ContentSource<T> + ?Sized,
    D: PagingDelegate<T> + ?Sized,
    V: Viewport<T> + ?Sized,
{
    /// Creates a pager that has not been set up yet.
    pub fn new(
        config: PagerConfig,
        source: &'a S,
        delegate: &'a mut D,
        viewport: &'a mut V,
    ) -> Self {
        Self {
            config,
            source,
            delegate,
            viewport,
            window: Window::new(),
            focus: FocusPosition::default(),
            layout: None,
            pending_jump: None,
        }
    }

    /// Builds the window around `seed` and attaches its items.
    ///
    /// The jump to the focused slot is deferred until [`Pager::run_deferred`].
    /// Calling this on a pager that is already set up replaces the window as
    /// [`Pager::reload_pages`] does.
    pub fn setup(&mut self, seed: T) {
        if !self.window.is_empty() {
            self.teardown();
        }

        let layout = SlotLayout::new(self.viewport.frame_size());
        let Assembly { window, focus } = assemble(seed, self.source, self.config.tail_padding);
        self.window = window;
        self.focus = focus;
        self.layout = Some(layout);

        self.attach_all();
        self.viewport.set_content_size(layout.content_size(self.window.populated()));
        self.pending_jump = Some(layout.slot_rect(self.focus.slot(&self.window)));

        log::debug!(
            "pager set up with {} pages, focus {:?}",
            self.window.populated(),
            self.focus
        );
    }

    /// Detaches every live page and rebuilds the window around `focus_on`.
    pub fn reload_pages(&mut self, focus_on: T) {
        log::debug!("pager reloading");
        self.teardown();
        self.setup(focus_on);
    }

    /// Applies the jump scheduled by setup or reload, if any.
    ///
    /// Returns `true` if a jump was applied.
    pub fn run_deferred(&mut self) -> bool {
        match self.pending_jump.take() {
            Some(rect) => {
                self.viewport.scroll_to(rect);
                true
            }
            None => false,
        }
    }

    /// Forwards an in-progress scroll to the delegate. Never changes state.
    pub fn did_scroll(&mut self) {
        log::trace!("pager scrolling");
        self.delegate.scrolling();
    }

    /// Handles the end of a scroll deceleration.
    ///
    /// Reads the viewport's final offset, decides whether a page boundary was
    /// crossed, and updates the window accordingly.
    ///
    /// After a transition the viewport is jumped to the newly focused slot,
    /// which may differ from the offset where the user's gesture stopped.
    ///
    /// # Panics
    ///
    /// Panics if called before [`Pager::setup`].
    pub fn did_end_decelerating(&mut self) -> Transition {
        assert!(
            self.layout.is_some(),
            "Pager::did_end_decelerating called before Pager::setup"
        );

        let x = self.viewport.content_offset_x();
        let width = self.viewport.frame_size().width;
        let landing = Landing::of(x, width, self.config.offset_tolerance);
        let from = self.focus;

        let transition = match (from, classify(from, landing)) {
            (FocusPosition::Left, Crossing::Forward) => self.forward_from_left(landing),
            (FocusPosition::Middle, Crossing::Forward) => self.forward_from_middle(),
            (FocusPosition::Middle, Crossing::Backward) => self.backward_from_middle(),
            (FocusPosition::Right, Crossing::Backward) => self.backward_from_right(landing),
            (FocusPosition::Middle, Crossing::Rest) => self.recenter(),
            (FocusPosition::Left, Crossing::Backward)
            | (FocusPosition::Right, Crossing::Forward)
            | (_, Crossing::Rest) => Transition::None,
        };

        log::debug!("pager scroll ended at {x} (page width {width}): {transition:?}");
        transition
    }

    fn forward_from_left(&mut self, landing: Landing) -> Transition {
        if !self.window.is_populated(Slot::Center) {
            return Transition::None;
        }

        let from = self.window.occupied(Slot::Left).clone();
        self.delegate.will_leave(&from);

        let to = if self.window.is_populated(Slot::Right) {
            self.focus = FocusPosition::Middle;
            if landing == Landing::Beyond {
                Slot::Right
            } else {
                Slot::Center
            }
        } else {
            self.focus = FocusPosition::Right;
            Slot::Center
        };
        self.delegate.arrived(self.window.occupied(to), &from);

        Transition::Refocused {
            from: FocusPosition::Left,
            to: self.focus,
        }
    }

    fn forward_from_middle(&mut self) -> Transition {
        match self.source.successor(self.window.occupied(Slot::Right)) {
            Some(next) => {
                self.delegate.will_leave(self.window.occupied(Slot::Center));
                self.viewport.detach(Slot::Left, self.window.occupied(Slot::Left));
                self.window.shift_forward(next);
                self.attach_all();
                self.jump_to(Slot::Center);
                self.delegate.arrived(
                    self.window.occupied(Slot::Center),
                    self.window.occupied(Slot::Left),
                );
                Transition::ShiftedForward
            }
            None => {
                self.focus = FocusPosition::Right;
                self.jump_to(Slot::Right);
                self.delegate.arrived(
                    self.window.occupied(Slot::Right),
                    self.window.occupied(Slot::Center),
                );
                Transition::Refocused {
                    from: FocusPosition::Middle,
                    to: FocusPosition::Right,
                }
            }
        }
    }

    fn backward_from_middle(&mut self) -> Transition {
        match self.source.predecessor(self.window.occupied(Slot::Left)) {
            Some(prev) => {
                self.delegate.will_leave(self.window.occupied(Slot::Center));
                self.viewport.detach(Slot::Right, self.window.occupied(Slot::Right));
                self.window.shift_backward(prev);
                self.attach_all();
                self.jump_to(Slot::Center);
                // The page we came from now sits on the right.
                self.delegate.arrived(
                    self.window.occupied(Slot::Center),
                    self.window.occupied(Slot::Right),
                );
                Transition::ShiftedBackward
            }
            None => {
                self.focus = FocusPosition::Left;
                self.jump_to(Slot::Left);
                self.delegate.arrived(
                    self.window.occupied(Slot::Left),
                    self.window.occupied(Slot::Center),
                );
                Transition::Refocused {
                    from: FocusPosition::Middle,
                    to: FocusPosition::Left,
                }
            }
        }
    }

    fn backward_from_right(&mut self, landing: Landing) -> Transition {
        if self.window.is_populated(Slot::Right) {
            self.delegate.will_leave(self.window.occupied(Slot::Right));
            self.focus = FocusPosition::Middle;
            self.jump_to(Slot::Center);
            self.delegate.arrived(
                self.window.occupied(Slot::Center),
                self.window.occupied(Slot::Right),
            );
            return Transition::Refocused {
                from: FocusPosition::Right,
                to: FocusPosition::Middle,
            };
        }

        // Two pages: one page width in is where the last page rests.
        if landing == Landing::AtPage {
            return self.recenter();
        }

        self.delegate.will_leave(self.window.occupied(Slot::Center));
        self.focus = FocusPosition::Left;
        self.jump_to(Slot::Left);
        self.delegate.arrived(
            self.window.occupied(Slot::Left),
            self.window.occupied(Slot::Center),
        );
        Transition::Refocused {
            from: FocusPosition::Right,
            to: FocusPosition::Left,
        }
    }

    fn recenter(&mut self) -> Transition {
        self.jump_to(self.focus.slot(&self.window));
        Transition::Recentered
    }

    fn attach_all(&mut self) {
        for (slot, item) in self.window.iter() {
            self.viewport.attach(slot, item);
        }
    }

    fn teardown(&mut self) {
        let old = self.window.take();
        for (slot, item) in old.iter() {
            self.viewport.detach(slot, item);
        }
        self.pending_jump = None;
    }

    /// Scrolls immediately, superseding any deferred jump.
    fn jump_to(&mut self, slot: Slot) {
        let Some(layout) = self.layout else {
            panic!("Pager jumped to {slot:?} before Pager::setup");
        };
        self.pending_jump = None;
        self.viewport.scroll_to(layout.slot_rect(slot));
    }

    /// The focused item, or `None` before setup.
    #[must_use]
    pub fn focused_item(&self) -> Option<&T> {
        self.window.get(self.focus.slot(&self.window))
    }

    /// The current focus position.
    #[must_use]
    pub fn focus_position(&self) -> FocusPosition {
        self.focus
    }

    /// Whether the user is dragging the viewport.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.viewport.is_dragging()
    }

    /// The item in `slot`, if any.
    #[must_use]
    pub fn item(&self, slot: Slot) -> Option<&T> {
        self.window.get(slot)
    }

    /// The live window.
    #[must_use]
    pub fn window(&self) -> &Window<T> {
        &self.window
    }

    /// Page geometry for a container of the given size under this pager's
    /// configuration.
    ///
    /// Hosts use the surface frame to size their viewport before
    /// [`Pager::setup`] and the item frame to place items inside slots.
    #[must_use]
    pub fn geometry(&self, container: Size) -> PageGeometry {
        PageGeometry::new(container, &self.config)
    }

    /// The slot layout computed at setup.
    #[must_use]
    pub fn layout(&self) -> Option<&SlotLayout> {
        self.layout.as_ref()
    }

    /// The jump waiting for [`Pager::run_deferred`], if any.
    #[must_use]
    pub fn pending_jump(&self) -> Option<Rect> {
        self.pending_jump
    }

    /// The configuration this pager was created with.
    #[must_use]
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Shared access to the delegate.
    #[must_use]
    pub fn delegate(&self) -> &D {
        &*self.delegate
    }

    /// Shared access to the viewport.
    #[must_use]
    pub fn viewport(&self) -> &V {
        &*self.viewport
    }

    /// Mutable access to the delegate.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut *self.delegate
    }

    /// Mutable access to the viewport, for hosts feeding it scroll input.
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut *self.viewport
    }
}
