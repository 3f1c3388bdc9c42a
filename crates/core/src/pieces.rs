//! Pieces module - shape catalog and rotation geometry
//!
//! Every kind has one canonical grid (its 0° orientation) stored in a static
//! catalog. Rotated orientations are never stored: each query remaps the local
//! cell back onto the canonical grid.
//!
//! Local coordinates are `(i, j)` with `i` the column and `j` the row, both
//! measured from the top-left corner of the piece's N×N bounding box.

use arrayvec::ArrayVec;

use crate::types::{Angle, PieceKind, FIELD_WIDTH, MAX_SHAPE_SIZE};

/// Offset of an occupied cell inside the bounding box, as `(i, j)`
pub type LocalCell = (i8, i8);

/// Occupied cells of one orientation; never allocates
pub type LocalCells = ArrayVec<LocalCell, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

type Grid = [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

/// Canonical shape of one piece kind
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    kind: PieceKind,
    size: usize,
    /// Row-major: `rows[j][i]`. Cells outside `size` are always false.
    rows: Grid,
}

const fn shape(kind: PieceKind, size: usize, grid: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Shape {
    let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    let mut j = 0;
    while j < MAX_SHAPE_SIZE {
        let mut i = 0;
        while i < MAX_SHAPE_SIZE {
            if grid[j][i] != 0 {
                assert!(i < size && j < size, "shape cell outside its bounding box");
                rows[j][i] = true;
            }
            i += 1;
        }
        j += 1;
    }
    Shape { kind, size, rows }
}

/// The catalog, indexed by [`PieceKind::index`]
pub static CATALOG: [Shape; 7] = [
    shape(
        PieceKind::I,
        4,
        [
            [0, 0, 0, 0],
            [1, 1, 1, 1],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ],
    ),
    shape(
        PieceKind::J,
        3,
        [
            [1, 0, 0, 0],
            [1, 1, 1, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ],
    ),
    shape(
        PieceKind::T,
        3,
        [
            [0, 1, 0, 0],
            [1, 1, 1, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ],
    ),
    shape(
        PieceKind::L,
        3,
        [
            [0, 0, 1, 0],
            [1, 1, 1, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ],
    ),
    shape(
        PieceKind::Z,
        3,
        [
            [1, 1, 0, 0],
            [0, 1, 1, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ],
    ),
    shape(
        PieceKind::S,
        3,
        [
            [0, 1, 1, 0],
            [1, 1, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ],
    ),
    shape(
        PieceKind::O,
        2,
        [
            [1, 1, 0, 0],
            [1, 1, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ],
    ),
];

impl Shape {
    /// Piece kind this shape belongs to
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Side length N of the bounding box
    pub fn size(&self) -> usize {
        self.size
    }

    /// Canonical (0°) occupancy of local cell `(i, j)`; false outside the box
    pub fn get(&self, i: usize, j: usize) -> bool {
        i < self.size && j < self.size && self.rows[j][i]
    }

    /// Whether local cell `(i, j)` is occupied when the piece is at `angle`
    ///
    /// Cells outside the bounding box are never occupied.
    #[inline]
    pub fn is_occupied(&self, i: usize, j: usize, angle: Angle) -> bool {
        if i >= self.size || j >= self.size {
            return false;
        }
        let (ci, cj) = canonical_cell(self.size, i, j, angle);
        self.rows[cj][ci]
    }

    /// All occupied local cells at `angle`, row by row from the top
    pub fn occupied_cells(&self, angle: Angle) -> LocalCells {
        let mut cells = LocalCells::new();
        for j in 0..self.size {
            for i in 0..self.size {
                if self.is_occupied(i, j, angle) {
                    cells.push((i as i8, j as i8));
                }
            }
        }
        cells
    }

    /// Number of all-empty rows above the first occupied row of the canonical grid
    pub fn leading_blank_rows(&self) -> usize {
        self.rows[..self.size]
            .iter()
            .take_while(|row| !row.iter().any(|&cell| cell))
            .count()
    }
}

/// Map a local cell at `angle` back onto the canonical grid
#[inline(always)]
fn canonical_cell(size: usize, i: usize, j: usize, angle: Angle) -> (usize, usize) {
    let last = size - 1;
    match angle {
        Angle::Deg0 => (i, j),
        Angle::Deg90 => (j, last - i),
        Angle::Deg180 => (last - i, last - j),
        Angle::Deg270 => (last - j, i),
    }
}

/// Canonical shape for a piece kind
#[inline]
pub fn shape_of(kind: PieceKind) -> &'static Shape {
    &CATALOG[kind.index()]
}

/// Whether `kind` at `angle` occupies local cell `(i, j)`
#[inline]
pub fn is_occupied(kind: PieceKind, i: usize, j: usize, angle: Angle) -> bool {
    shape_of(kind).is_occupied(i, j, angle)
}

/// Initial `(x, y)` for a freshly spawned piece
///
/// The bounding box is centered horizontally (truncating), and raised by the
/// shape's leading blank rows so its first occupied row lands on field row 0.
pub fn spawn_offset(kind: PieceKind) -> (i8, i8) {
    let shape = shape_of(kind);
    let x = (FIELD_WIDTH as i8 - shape.size() as i8) / 2;
    let y = -(shape.leading_blank_rows() as i8);
    (x, y)
}
