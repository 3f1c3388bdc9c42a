use crate::pieces::{shape_of, spawn_offset, LocalCells};
use crate::types::{Angle, PieceKind};

/// A piece kind at a position and orientation on the field
///
/// `(x, y)` is the field coordinate of the top-left corner of the piece's
/// bounding box. Values are cheap to copy; moves return new placements so the
/// caller can test a candidate before committing to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub angle: Angle,
}

impl Placement {
    /// Create a placement from its parts
    pub fn new(kind: PieceKind, x: i8, y: i8, angle: Angle) -> Self {
        Self { kind, x, y, angle }
    }

    /// Spawn placement: [`spawn_offset`] at 0°
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = spawn_offset(kind);
        Self::new(kind, x, y, Angle::Deg0)
    }

    /// Moved by `(dx, dy)`; coordinates saturate at the `i8` limits
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Turned one quarter to the right in place
    pub fn rotated_right(&self) -> Self {
        Self {
            angle: self.angle.rotate_right(),
            ..*self
        }
    }

    /// Field coordinates of every occupied cell
    ///
    /// Coordinates saturate at the `i8` limits, so cells of a box hanging past
    /// `i8::MAX` are clamped rather than wrapped.
    pub fn cells(&self) -> LocalCells {
        let mut cells = shape_of(self.kind).occupied_cells(self.angle);
        for cell in cells.iter_mut() {
            cell.0 = cell.0.saturating_add(self.x);
            cell.1 = cell.1.saturating_add(self.y);
        }
        cells
    }
}
