//! Core shape/placement module - pure, deterministic, and testable
//!
//! This crate holds the rules a falling-block game cannot get wrong: which
//! cells each piece occupies in each orientation, which field positions are
//! legal, and how a landed piece is merged into the field. It has no
//! dependencies on rendering, input, timing or I/O.
//!
//! # Module Structure
//!
//! - [`pieces`]: static shape catalog, rotation-aware cell queries, spawn offsets
//! - [`field`]: 10x20 field with boundary-aware blocking, collision and absorption
//! - [`placement`]: a piece kind at a position and orientation
//!
//! # Rules
//!
//! - Rotation is computed per query by remapping indices; rotated grids are never stored
//! - Side walls and the floor are solid, the space above the field is open
//! - Absorption does not validate; callers check collision first
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Field, Placement};
//! use blockfall_core::types::PieceKind;
//!
//! let mut field = Field::new();
//! let piece = Placement::spawn(PieceKind::I);
//! assert!(field.fits(&piece));
//!
//! // Hard drop: the I piece's occupied row lands on the bottom row.
//! let resting = field.landing(&piece);
//! assert_eq!(resting.y, 18);
//! field.absorb_placement(&resting);
//!
//! assert!(field.is_blocked(3, 19));
//! assert!(!field.is_blocked(3, 18));
//! ```
//!
//! # Logging
//!
//! Absorption is reported at `debug` level and collision hits at `trace` level
//! through the `log` facade. No logger is installed here.

pub mod field;
pub mod pieces;
pub mod placement;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use field::{Field, FieldParseError};
pub use pieces::{is_occupied, shape_of, spawn_offset, LocalCell, LocalCells, Shape};
pub use placement::Placement;
