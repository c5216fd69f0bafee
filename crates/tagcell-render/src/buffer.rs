#![forbid(unsafe_code)]

//! Grid storage.
//!
//! [`Surface`] is the only thing text printing needs from a display: read
//! the cell at a column/row and overwrite it. [`Buffer`] is the in-memory
//! implementation used by tests and by callers that render off-screen.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation

use crate::cell::Cell;

/// A grid of cells addressed by column and row.
///
/// Coordinates are signed so that callers may position text partly
/// off-screen; implementations ignore writes outside their bounds and report
/// `None` for reads outside them.
pub trait Surface {
    /// The cell at `(x, y)`, or `None` when outside the surface.
    fn cell(&self, x: i32, y: i32) -> Option<Cell>;

    /// Overwrite the cell at `(x, y)`. Out-of-bounds writes are ignored.
    fn set_cell(&mut self, x: i32, y: i32, cell: Cell);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        (**self).cell(x, y)
    }

    fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        (**self).set_cell(x, y, cell);
    }
}

/// A 2D grid of cells.
///
/// # Example
///
/// ```
/// use tagcell_render::buffer::Buffer;
/// use tagcell_render::cell::Cell;
///
/// let mut buffer = Buffer::new(80, 24);
/// buffer.set(0, 0, Cell::from_char('H'));
/// buffer.set(1, 0, Cell::from_char('i'));
/// assert_eq!(buffer.row_text(0).trim_end(), "Hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// All cells are initialized to [`Cell::default`].
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");

        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer is empty (never true for a constructed buffer).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Set the cell at (x, y). Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to the default.
    pub fn clear(&mut self) {
        self.clear_with(Cell::default());
    }

    /// Fill every cell with `cell`.
    pub fn clear_with(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// The glyphs of row `y` as a string, one char per cell.
    ///
    /// Wide glyphs appear once per covered cell. Returns an empty string for
    /// rows outside the buffer.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .map(|c| c.content)
            .collect()
    }
}

impl Surface for Buffer {
    fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        self.get(x, y).copied()
    }

    fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) {
            self.set(x, y, cell);
        }
    }
}
