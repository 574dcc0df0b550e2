#![forbid(unsafe_code)]

//! Per-render draw target.

use veneer_core::geometry::Rect;

use crate::buffer::Buffer;

/// The target widgets draw into during one render pass.
///
/// Wraps a [`Buffer`] plus the cursor request for this frame. A new
/// frame starts cleared; the presenter consumes it after the view pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The cell grid for this frame.
    pub buffer: Buffer,
    cursor: Option<(u16, u16)>,
}

impl Frame {
    /// Create an empty frame.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            cursor: None,
        }
    }

    /// Width in columns.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Height in rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// The full frame extent.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.buffer.bounds()
    }

    /// Clear the buffer and cursor request for the next render pass.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = None;
    }

    /// Resize the underlying buffer, clearing content.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.buffer.resize(width, height);
        self.cursor = None;
    }

    /// Request the cursor at a position, or hide it with `None`.
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor = position;
    }

    /// The cursor requested for this frame.
    #[must_use]
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }
}
