//! Field module - the playing field and its collision rules
//!
//! The field is a 10x20 grid where each cell is empty or remembers the kind of
//! the piece that filled it. Uses a flat array for cache locality and no heap.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! Boundary policy for collision queries is deliberately asymmetric:
//! the side walls and the floor are solid, while everything above row 0 is
//! open so pieces can spawn partly outside the field.

use std::fmt;

use crate::pieces::shape_of;
use crate::placement::Placement;
use crate::types::{Angle, Cell, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells on the field
const FIELD_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// Marker for an empty cell in the textual layout
const EMPTY_CHAR: char = '.';

/// Errors from [`Field::from_rows`]
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum FieldParseError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row}: expected {expected} cells, found {found}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, column {col}: unknown cell {ch:?}")]
    UnknownCell { row: usize, col: usize, ch: char },
}

/// The playing field - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (FIELD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the field
    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    /// Get height of the field
    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell; returns false if out of bounds
    fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// [`Field::set`] for widened coordinates; anything outside `i8` is out of bounds
    fn set_wide(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match (i8::try_from(x), i8::try_from(y)) {
            (Ok(x), Ok(y)) => self.set(x, y, cell),
            _ => false,
        }
    }

    /// Whether a piece cell may not occupy field position (x, y)
    ///
    /// - left of column 0 or right of the last column: blocked
    /// - at or below the floor: blocked
    /// - above row 0: open
    /// - otherwise: blocked iff the cell is filled
    #[inline]
    pub fn is_blocked(&self, x: i8, y: i8) -> bool {
        self.blocked_at(x.into(), y.into())
    }

    /// Boundary policy on `i16`, so box corner plus local offset never overflows
    #[inline(always)]
    fn blocked_at(&self, x: i16, y: i16) -> bool {
        if x < 0 || x >= FIELD_WIDTH as i16 {
            return true;
        }
        if y >= FIELD_HEIGHT as i16 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.cells[(y as usize) * (FIELD_WIDTH as usize) + (x as usize)].is_some()
    }

    /// Whether `kind` at `angle` with its box corner at (x, y) overlaps a wall,
    /// the floor or a filled cell
    pub fn collides(&self, kind: PieceKind, x: i8, y: i8, angle: Angle) -> bool {
        let shape = shape_of(kind);
        let size = shape.size();
        for j in 0..size {
            for i in 0..size {
                if !shape.is_occupied(i, j, angle) {
                    continue;
                }
                let (fx, fy) = (x as i16 + i as i16, y as i16 + j as i16);
                if self.blocked_at(fx, fy) {
                    log::trace!(
                        "{:?} at ({}, {}) {}° blocked at field cell ({}, {})",
                        kind,
                        x,
                        y,
                        angle.degrees(),
                        fx,
                        fy
                    );
                    return true;
                }
            }
        }
        false
    }

    /// Negation of [`Field::collides`] for a placement
    pub fn fits(&self, placement: &Placement) -> bool {
        !self.collides(placement.kind, placement.x, placement.y, placement.angle)
    }

    /// Where `placement` comes to rest when dropped straight down
    ///
    /// Expects a placement that fits; one that cannot move down is returned
    /// unchanged. Used for hard drops and ghost pieces.
    pub fn landing(&self, placement: &Placement) -> Placement {
        let mut resting = *placement;
        loop {
            let below = resting.shifted(0, 1);
            if !self.fits(&below) {
                return resting;
            }
            resting = below;
        }
    }

    /// Merge a landed piece into the field
    ///
    /// Writes `kind` into every field cell the piece occupies. No validation
    /// happens here: the caller must already have checked that the placement
    /// does not collide and lies inside the field. Both are asserted in debug
    /// builds; in release builds out-of-range cells are skipped.
    pub fn absorb(&mut self, kind: PieceKind, x: i8, y: i8, angle: Angle) {
        debug_assert!(
            !self.collides(kind, x, y, angle),
            "absorbing colliding {:?} at ({}, {}) {}°",
            kind,
            x,
            y,
            angle.degrees()
        );
        log::debug!(
            "absorb {:?} at ({}, {}) {}°",
            kind,
            x,
            y,
            angle.degrees()
        );

        for (i, j) in shape_of(kind).occupied_cells(angle) {
            let (fx, fy) = (x as i16 + i as i16, y as i16 + j as i16);
            let written = self.set_wide(fx, fy, Some(kind));
            debug_assert!(written, "absorbed cell ({}, {}) lies outside the field", fx, fy);
        }
    }

    /// [`Field::absorb`] for a placement
    pub fn absorb_placement(&mut self, placement: &Placement) {
        self.absorb(placement.kind, placement.x, placement.y, placement.angle);
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Kind ids per cell, `[y][x]`, with 0 for empty
    pub fn to_ids(&self) -> [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize] {
        let mut ids = [[0u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];
        for (row, chunk) in ids.iter_mut().zip(self.cells.chunks_exact(FIELD_WIDTH as usize)) {
            for (id, cell) in row.iter_mut().zip(chunk) {
                *id = cell.map_or(0, PieceKind::id);
            }
        }
        ids
    }

    /// Build a field from its textual layout, one string per row
    ///
    /// `.` is an empty cell, a kind letter (either case) is a filled one.
    /// This is the inverse of the `Display` output.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, FieldParseError> {
        let width = FIELD_WIDTH as usize;
        let height = FIELD_HEIGHT as usize;
        if rows.len() != height {
            return Err(FieldParseError::RowCount {
                expected: height,
                found: rows.len(),
            });
        }

        let mut field = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(FieldParseError::RowWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    EMPTY_CHAR => None,
                    _ => Some(PieceKind::from_char(ch).ok_or(FieldParseError::UnknownCell {
                        row: y,
                        col: x,
                        ch,
                    })?),
                };
                field.cells[y * width + x] = cell;
            }
        }
        Ok(field)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks_exact(FIELD_WIDTH as usize).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = cell.map_or(EMPTY_CHAR, |kind| kind.as_char());
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
