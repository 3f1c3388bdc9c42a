//! Field tests - blocking, collision and absorption

use blockfall::core::pieces::{is_occupied, shape_of, spawn_offset};
use blockfall::core::Field;
use blockfall::types::{Angle, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

const W: i8 = FIELD_WIDTH as i8;
const H: i8 = FIELD_HEIGHT as i8;

fn field_with_bottom(rows: &[&str]) -> Field {
    let mut layout = vec![".".repeat(FIELD_WIDTH as usize); FIELD_HEIGHT as usize - rows.len()];
    layout.extend(rows.iter().map(|row| row.to_string()));
    Field::from_rows(&layout).unwrap()
}

#[test]
fn test_field_new_empty() {
    let field = Field::new();
    assert_eq!(field.width(), FIELD_WIDTH);
    assert_eq!(field.height(), FIELD_HEIGHT);
    assert_eq!(field.cells().len(), FIELD_WIDTH as usize * FIELD_HEIGHT as usize);

    for y in 0..H {
        for x in 0..W {
            assert!(!field.is_blocked(x, y), "Cell ({}, {}) should be open", x, y);
            assert_eq!(field.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_field_get_out_of_bounds() {
    let field = Field::new();
    assert_eq!(field.get(-1, 0), None);
    assert_eq!(field.get(0, -1), None);
    assert_eq!(field.get(W, 0), None);
    assert_eq!(field.get(0, H), None);
}

// ============== Boundary Policy ==============

#[test]
fn test_walls_are_solid() {
    let field = Field::new();
    for y in 0..H {
        assert!(field.is_blocked(-1, y));
        assert!(field.is_blocked(W, y));
    }
}

#[test]
fn test_floor_is_solid() {
    let field = Field::new();
    for x in -2..W + 2 {
        assert!(field.is_blocked(x, H));
        assert!(field.is_blocked(x, H + 3));
    }
}

#[test]
fn test_ceiling_is_open() {
    let field = Field::new();
    for x in 0..W {
        assert!(!field.is_blocked(x, -1));
        assert!(!field.is_blocked(x, -4));
    }
}

// ============== Collision ==============

#[test]
fn test_no_collision_anywhere_inside_empty_field() {
    let field = Field::new();
    for kind in PieceKind::ALL {
        let size = shape_of(kind).size() as i8;
        for angle in Angle::ALL {
            for y in -(H)..H {
                for x in -size..W + size {
                    let inside = shape_of(kind)
                        .occupied_cells(angle)
                        .iter()
                        .all(|&(i, j)| x + i >= 0 && x + i < W && y + j < H);
                    assert_eq!(
                        field.collides(kind, x, y, angle),
                        !inside,
                        "{:?} {:?} at ({}, {})",
                        kind,
                        angle,
                        x,
                        y
                    );
                }
            }
        }
    }
}

#[test]
fn test_collision_with_filled_cell() {
    let field = field_with_bottom(&["....Z....."]);

    // T flat side down, sitting on row 18/19.
    assert!(field.collides(PieceKind::T, 3, 18, Angle::Deg0));
    // One row up it rests on the Z cell.
    assert!(!field.collides(PieceKind::T, 3, 17, Angle::Deg0));
    // Shifted away from the Z cell it fits on the floor.
    assert!(!field.collides(PieceKind::T, 5, 18, Angle::Deg0));
}

#[test]
fn test_empty_box_cells_do_not_collide() {
    // The I piece's bounding box hangs past the floor, but its only
    // filled row is row 1 of the box.
    let field = Field::new();
    assert!(!field.collides(PieceKind::I, 3, 18, Angle::Deg0));
    assert!(field.collides(PieceKind::I, 3, 19, Angle::Deg0));

    // Same for the left wall: vertical I uses column 2 of its box.
    assert!(!field.collides(PieceKind::I, -2, 5, Angle::Deg90));
    assert!(field.collides(PieceKind::I, -3, 5, Angle::Deg90));
}

#[test]
fn test_left_wall_rejects_column_zero() {
    let field = Field::new();
    for kind in PieceKind::ALL {
        for angle in Angle::ALL {
            let uses_column_zero = (0..shape_of(kind).size()).any(|j| is_occupied(kind, 0, j, angle));
            if uses_column_zero {
                assert!(
                    field.collides(kind, -1, 5, angle),
                    "{:?} {:?} should hit the wall",
                    kind,
                    angle
                );
            }
        }
    }
}

#[test]
fn test_i_piece_drops_to_row_18() {
    let field = Field::new();
    let (x, mut y) = spawn_offset(PieceKind::I);
    assert_eq!((x, y), (3, -1));
    assert!(!field.collides(PieceKind::I, x, y, Angle::Deg0));

    while !field.collides(PieceKind::I, x, y + 1, Angle::Deg0) {
        y += 1;
    }
    assert_eq!(y, 18);
}

#[test]
fn test_spawn_never_collides_on_empty_field() {
    let field = Field::new();
    for kind in PieceKind::ALL {
        let (x, y) = spawn_offset(kind);
        assert!(!field.collides(kind, x, y, Angle::Deg0), "{:?}", kind);
    }
}

#[test]
fn test_collision_at_i8_limits() {
    let field = Field::new();

    // Right of the field and below the floor stay solid even when the box
    // corner sits at the top of the coordinate range.
    assert!(field.collides(PieceKind::S, i8::MAX, 5, Angle::Deg0));
    assert!(field.collides(PieceKind::I, 3, i8::MAX, Angle::Deg0));
    assert!(field.collides(PieceKind::T, i8::MIN, 5, Angle::Deg0));

    for kind in PieceKind::ALL {
        for angle in Angle::ALL {
            assert!(field.collides(kind, 3, i8::MAX, angle), "{:?} {:?}", kind, angle);
            assert!(field.collides(kind, i8::MAX, 5, angle), "{:?} {:?}", kind, angle);
            assert!(field.collides(kind, i8::MAX, i8::MAX, angle), "{:?} {:?}", kind, angle);
            // Far above the field is open sky.
            assert!(!field.collides(kind, 3, i8::MIN, angle), "{:?} {:?}", kind, angle);
        }
    }
}

// ============== Absorption ==============

#[test]
fn test_absorb_fills_exactly_occupied_cells() {
    for kind in PieceKind::ALL {
        for angle in Angle::ALL {
            let mut field = field_with_bottom(&["JJ......LL"]);
            let before = field.clone();
            let (x, y) = (3, 10);
            assert!(!field.collides(kind, x, y, angle));

            field.absorb(kind, x, y, angle);

            for fy in 0..H {
                for fx in 0..W {
                    let (i, j) = (fx - x, fy - y);
                    let covered =
                        i >= 0 && j >= 0 && is_occupied(kind, i as usize, j as usize, angle);
                    let expected = if covered {
                        Some(Some(kind))
                    } else {
                        before.get(fx, fy)
                    };
                    assert_eq!(field.get(fx, fy), expected, "{:?} {:?} ({}, {})", kind, angle, fx, fy);
                }
            }
        }
    }
}

#[test]
fn test_absorbed_cells_block() {
    let mut field = Field::new();
    field.absorb(PieceKind::O, 0, 18, Angle::Deg0);

    assert!(field.is_blocked(0, 18));
    assert!(field.is_blocked(1, 19));
    assert!(!field.is_blocked(2, 19));
    assert!(field.collides(PieceKind::O, 1, 17, Angle::Deg0));
    assert!(!field.collides(PieceKind::O, 0, 16, Angle::Deg0));
}

#[test]
fn test_absorb_keeps_kind_per_cell() {
    let mut field = Field::new();
    field.absorb(PieceKind::I, 0, 18, Angle::Deg0);
    field.absorb(PieceKind::L, 4, 18, Angle::Deg0);

    let expected = [
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "......L...",
        "IIIILLL...",
    ];
    assert_eq!(field.to_string(), expected.join("\n"));
}

#[test]
fn test_absorb_with_box_above_field() {
    // A piece may rest with blank box rows above the field.
    let mut field = Field::new();
    field.absorb(PieceKind::I, 0, -1, Angle::Deg0);
    assert_eq!(field.get(0, 0), Some(Some(PieceKind::I)));
    assert_eq!(field.get(3, 0), Some(Some(PieceKind::I)));
    assert_eq!(field.get(4, 0), Some(None));
}
