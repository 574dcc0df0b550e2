#![forbid(unsafe_code)]

//! Row-major cell grid.

use veneer_core::geometry::Rect;

use crate::cell::Cell;

/// A rectangular grid of cells with bounds-checked access.
///
/// Out-of-bounds reads return `None`; out-of-bounds writes are dropped.
/// Widgets never need to pre-clip against the buffer edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer filled with empty cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
        }
    }

    /// Width in columns.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full extent as a [`Rect`] at the origin.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Read a cell; `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Mutable cell access; `None` when out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Write a cell, ignoring out-of-bounds coordinates.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill a rectangle (clipped to the buffer) with one cell value.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let rect = rect.intersection(&self.bounds());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Resize the grid, dropping previous content.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::EMPTY);
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cells of one row, empty when out of bounds.
    #[must_use]
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// The characters of one row as a `String` (for tests and golden
    /// snapshots).
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        self.row_cells(y).iter().map(|c| c.ch).collect()
    }

    /// Whether two buffers display identical characters, ignoring
    /// styling.
    #[must_use]
    pub fn content_eq(&self, other: &Buffer) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| a.ch == b.ch)
    }
}
