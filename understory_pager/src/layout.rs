// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot rectangles and page geometry.
//!
//! Everything here is a pure function of sizes: [`PageGeometry`] derives the
//! page surface and item frames from a container, and [`SlotLayout`] lays the
//! three [`Slot`]s out side by side inside the surface's scrollable content.

use kurbo::{Point, Rect, Size};

use crate::config::PagerConfig;
use crate::slot::Slot;

/// Page-level geometry derived from a container size and a [`PagerConfig`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PageGeometry {
    page_size: Size,
    page_padding: f64,
    surface_frame: Rect,
}

impl PageGeometry {
    /// Computes the geometry for a container of the given size.
    ///
    /// The page padding is a quarter of the horizontal space the container
    /// has beyond one page. In centered mode the surface is widened by that
    /// padding and centered horizontally; vertically it sits a quarter of the
    /// spare height from the top.
    #[must_use]
    pub fn new(container: Size, config: &PagerConfig) -> Self {
        let page_size = config.resolve_page_size(container);
        let page_padding = (container.width - page_size.width) / 4.0;
        let surface_frame = if config.center_page {
            let width = page_size.width + page_padding;
            let x = (container.width - width) / 2.0;
            let y = (container.height - page_size.height) / 4.0;
            Rect::from_origin_size(Point::new(x, y), Size::new(width, page_size.height))
        } else {
            Rect::from_origin_size(Point::ZERO, page_size)
        };
        Self {
            page_size,
            page_padding,
            surface_frame,
        }
    }

    /// Size of one page.
    #[must_use]
    pub fn page_size(&self) -> Size {
        self.page_size
    }

    /// Horizontal padding around each page.
    #[must_use]
    pub fn page_padding(&self) -> f64 {
        self.page_padding
    }

    /// Frame of the scroll surface in container coordinates.
    #[must_use]
    pub fn surface_frame(&self) -> Rect {
        self.surface_frame
    }

    /// Frame an item occupies inside its slot, in slot-local coordinates.
    #[must_use]
    pub fn item_frame(&self) -> Rect {
        Rect::from_origin_size(Point::new(self.page_padding / 2.0, 0.0), self.page_size)
    }
}

/// Three adjacent, equally sized slot rectangles in scroll-content space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotLayout {
    surface: Size,
    rects: [Rect; 3],
}

impl SlotLayout {
    /// Lays out the slots for a scroll surface of the given frame size.
    ///
    /// Slot `i` starts at `i * surface.width`.
    #[must_use]
    pub fn new(surface: Size) -> Self {
        let rects = Slot::ALL.map(|slot| {
            let x = slot.index() as f64 * surface.width;
            Rect::from_origin_size(Point::new(x, 0.0), surface)
        });
        Self { surface, rects }
    }

    /// Size of a single slot (the surface frame size).
    #[must_use]
    pub fn page_extent(&self) -> Size {
        self.surface
    }

    /// Rectangle of `slot` in scroll-content coordinates.
    #[must_use]
    pub fn slot_rect(&self, slot: Slot) -> Rect {
        self.rects[slot.index()]
    }

    /// Total scrollable content size for `populated` live slots.
    ///
    /// `populated` is clamped to the three available slots.
    #[must_use]
    pub fn content_size(&self, populated: usize) -> Size {
        let pages = populated.min(Slot::ALL.len());
        let width = self.surface.width * pages as f64;
        Size::new(width, self.surface.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_sit_one_surface_width_apart() {
        let layout = SlotLayout::new(Size::new(100.0, 200.0));
        assert_eq!(layout.slot_rect(Slot::Left), Rect::new(0.0, 0.0, 100.0, 200.0));
        assert_eq!(
            layout.slot_rect(Slot::Center),
            Rect::new(100.0, 0.0, 200.0, 200.0)
        );
        assert_eq!(
            layout.slot_rect(Slot::Right),
            Rect::new(200.0, 0.0, 300.0, 200.0)
        );
    }

    #[test]
    fn content_size_scales_with_population() {
        let layout = SlotLayout::new(Size::new(100.0, 200.0));
        assert_eq!(layout.content_size(1), Size::new(100.0, 200.0));
        assert_eq!(layout.content_size(2), Size::new(200.0, 200.0));
        assert_eq!(layout.content_size(3), Size::new(300.0, 200.0));
        assert_eq!(layout.content_size(7), Size::new(300.0, 200.0));
    }

    #[test]
    fn full_screen_pages_have_no_padding() {
        let container = Size::new(400.0, 800.0);
        let geometry = PageGeometry::new(container, &PagerConfig::default());
        assert_eq!(geometry.page_size(), container);
        assert_eq!(geometry.page_padding(), 0.0);
        assert_eq!(geometry.surface_frame(), Rect::new(0.0, 0.0, 400.0, 800.0));
        assert_eq!(geometry.item_frame(), Rect::new(0.0, 0.0, 400.0, 800.0));
    }

    #[test]
    fn centered_page_is_padded_and_centered() {
        let container = Size::new(400.0, 800.0);
        let config = PagerConfig::new()
            .with_page_size(Size::new(320.0, 600.0))
            .with_center_page(true);
        let geometry = PageGeometry::new(container, &config);

        // (400 - 320) / 4
        assert_eq!(geometry.page_padding(), 20.0);
        // width 340, x = (400 - 340) / 2, y = (800 - 600) / 4
        assert_eq!(
            geometry.surface_frame(),
            Rect::new(30.0, 50.0, 370.0, 650.0)
        );
        assert_eq!(geometry.item_frame(), Rect::new(10.0, 0.0, 330.0, 600.0));
    }

    #[test]
    fn uncentered_surface_has_page_size_at_origin() {
        let config = PagerConfig::new().with_page_size(Size::new(320.0, 600.0));
        let geometry = PageGeometry::new(Size::new(400.0, 800.0), &config);
        assert_eq!(geometry.surface_frame(), Rect::new(0.0, 0.0, 320.0, 600.0));
    }
}
