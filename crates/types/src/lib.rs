//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the shape/placement core
//! and by whatever drives it (game loop, renderer). All types are plain data
//! with no external dependencies.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - Rows above the field (`y < 0`) are open space; pieces spawn there.
//!
//! # Piece Kinds
//!
//! Kinds carry stable ids in catalog order. Id 0 is reserved for an empty cell.
//!
//! | Id | Kind | Box |
//! |----|------|-----|
//! | 1 | I | 4x4 |
//! | 2 | J | 3x3 |
//! | 3 | T | 3x3 |
//! | 4 | L | 3x3 |
//! | 5 | Z | 3x3 |
//! | 6 | S | 3x3 |
//! | 7 | O | 2x2 |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Angle, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.id(), 3);
//!
//! let angle = Angle::Deg270.rotate_right();
//! assert_eq!(angle, Angle::Deg0);
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u8 = 20;

/// Edge length of one cell in pixels. Only renderers care about this.
pub const CELL_PIXEL_SIZE: u32 = 10;

/// Largest bounding box side of any piece shape
pub const MAX_SHAPE_SIZE: usize = 4;


/// The seven piece kinds, in catalog order
///
/// The discriminant is the kind's stable id (1..=7). Renderers use it to
/// pick a color or a texture slice; 0 is never a valid kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    I = 1,
    J = 2,
    T = 3,
    L = 4,
    Z = 5,
    S = 6,
    O = 7,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::T,
        PieceKind::L,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
    ];

    /// Stable numeric id (1..=7)
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Zero-based position in [`PieceKind::ALL`]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Look up a kind by its stable id
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(7), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[id as usize - 1]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Parse piece kind from its letter (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'i' => Some(PieceKind::I),
            'j' => Some(PieceKind::J),
            't' => Some(PieceKind::T),
            'l' => Some(PieceKind::L),
            'z' => Some(PieceKind::Z),
            's' => Some(PieceKind::S),
            'o' => Some(PieceKind::O),
            _ => None,
        }
    }

    /// Uppercase letter, as used in textual field dumps
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::Z => 'Z',
            PieceKind::S => 'S',
            PieceKind::O => 'O',
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::O => "o",
        }
    }
}

/// Orientation of a piece, in quarter turns
///
/// The cycle goes: 0° → 90° → 180° → 270° → 0°.
/// Only rotation to the right exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Angle {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Angle {
    /// Every orientation, in rotation order
    pub const ALL: [Angle; 4] = [Angle::Deg0, Angle::Deg90, Angle::Deg180, Angle::Deg270];

    /// Advance one quarter turn, wrapping 270° back to 0°
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Angle;
    ///
    /// assert_eq!(Angle::Deg0.rotate_right(), Angle::Deg90);
    /// assert_eq!(Angle::Deg90.rotate_right(), Angle::Deg180);
    /// assert_eq!(Angle::Deg180.rotate_right(), Angle::Deg270);
    /// assert_eq!(Angle::Deg270.rotate_right(), Angle::Deg0);
    /// ```
    pub fn rotate_right(&self) -> Self {
        match self {
            Angle::Deg0 => Angle::Deg90,
            Angle::Deg90 => Angle::Deg180,
            Angle::Deg180 => Angle::Deg270,
            Angle::Deg270 => Angle::Deg0,
        }
    }

    /// Angle in degrees (0, 90, 180 or 270)
    pub fn degrees(&self) -> u16 {
        match self {
            Angle::Deg0 => 0,
            Angle::Deg90 => 90,
            Angle::Deg180 => 180,
            Angle::Deg270 => 270,
        }
    }

    /// Parse from a degree value; only exact quarter turns below 360 are accepted
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Angle::Deg0),
            90 => Some(Angle::Deg90),
            180 => Some(Angle::Deg180),
            270 => Some(Angle::Deg270),
            _ => None,
        }
    }
}

/// A cell on the field
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a piece of that kind
pub type Cell = Option<PieceKind>;
