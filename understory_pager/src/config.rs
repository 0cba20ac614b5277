// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pager configuration.

use kurbo::Size;

/// How the window is padded when the seed is the last item of a sequence
/// with at least two predecessors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TailPadding {
    /// Place the seed's second predecessor in both the left and center slots.
    ///
    /// This matches the window produced by earlier paging controllers and is
    /// the default.
    #[default]
    Duplicate,
    /// Place the second predecessor on the left and the direct predecessor in
    /// the center, so the three slots are in sequence order.
    Adjacent,
}

/// Configuration for a [`Pager`](crate::Pager).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PagerConfig {
    /// Size of one page. `None` (or a zero size) means "the container size".
    pub page_size: Option<Size>,
    /// Whether the page surface is centered inside its container with the
    /// page padding added to its width.
    pub center_page: bool,
    /// Window shape for a seed at the tail of the sequence.
    pub tail_padding: TailPadding,
    /// Offsets closer than this to one page width are treated as exactly one
    /// page width when classifying a scroll end.
    pub offset_tolerance: f64,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: None,
            center_page: false,
            tail_padding: TailPadding::default(),
            offset_tolerance: 0.5,
        }
    }
}

impl PagerConfig {
    /// Returns the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit page size.
    #[must_use]
    pub fn with_page_size(mut self, size: Size) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Enables or disables centered page mode.
    #[must_use]
    pub fn with_center_page(mut self, center_page: bool) -> Self {
        self.center_page = center_page;
        self
    }

    /// Sets the tail padding policy.
    #[must_use]
    pub fn with_tail_padding(mut self, tail_padding: TailPadding) -> Self {
        self.tail_padding = tail_padding;
        self
    }

    /// Sets the offset tolerance, clamping negative values to zero.
    #[must_use]
    pub fn with_offset_tolerance(mut self, tolerance: f64) -> Self {
        self.offset_tolerance = tolerance.max(0.0);
        self
    }

    /// Resolves the page size against a container size.
    #[must_use]
    pub fn resolve_page_size(&self, container: Size) -> Size {
        match self.page_size {
            Some(size) if size != Size::ZERO => size,
            _ => container,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_zero_page_size_falls_back_to_container() {
        let container = Size::new(320.0, 480.0);
        assert_eq!(PagerConfig::new().resolve_page_size(container), container);
        let zero = PagerConfig::new().with_page_size(Size::ZERO);
        assert_eq!(zero.resolve_page_size(container), container);
    }

    #[test]
    fn explicit_page_size_wins() {
        let config = PagerConfig::new().with_page_size(Size::new(200.0, 300.0));
        assert_eq!(
            config.resolve_page_size(Size::new(320.0, 480.0)),
            Size::new(200.0, 300.0)
        );
    }

    #[test]
    fn negative_tolerance_is_clamped() {
        let config = PagerConfig::new().with_offset_tolerance(-3.0);
        assert_eq!(config.offset_tolerance, 0.0);
    }
}
