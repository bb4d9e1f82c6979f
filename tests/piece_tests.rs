//! Integration tests for piece movement and rotation against a field.

use termtris::core::{Field, Piece};
use termtris::types::{PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};

#[test]
fn full_descent_of_an_o_piece() {
    // Spawn at the top center, descend one row at a time until the floor
    // rejects the next step, then settle.
    let mut field = Field::new();
    let mut piece = Piece::spawn(PieceKind::O);
    assert_eq!(piece.position(), (0, 4));

    let mut drops = 0;
    while piece.attempt_move(0, 1, &field) {
        drops += 1;
    }
    // A 2-row-tall piece starting at row 0 can descend 18 times.
    assert_eq!(drops, (FIELD_HEIGHT - 2) as i16);
    assert_eq!(piece.position(), (18, 4));

    field.commit(&piece);
    for (row, col) in [(18, 4), (18, 5), (19, 4), (19, 5)] {
        assert_eq!(field.get(row, col), Some(PieceKind::O.color()));
    }
    // Two settled cells per row complete nothing.
    assert_eq!(field.compact_full_rows(), 0);
}

#[test]
fn piece_can_slide_along_the_floor() {
    let field = Field::new();
    let mut piece = Piece::spawn(PieceKind::O);
    while piece.attempt_move(0, 1, &field) {}

    assert!(piece.attempt_move(-1, 0, &field));
    assert!(piece.attempt_move(1, 0, &field));
    assert_eq!(piece.position(), (18, 4));
}

#[test]
fn walls_bound_horizontal_movement_for_every_kind() {
    let field = Field::new();
    for kind in PieceKind::ALL {
        let mut piece = Piece::spawn(kind);
        let mut moves = 0;
        while piece.attempt_move(-1, 0, &field) {
            moves += 1;
            assert!(moves <= FIELD_WIDTH as i16, "{:?} escaped the field", kind);
        }
        assert_eq!(piece.position().1, 0);

        while piece.attempt_move(1, 0, &field) {}
        let width = kind.orientations()[0][0].len() as i16;
        assert_eq!(piece.position().1, FIELD_WIDTH as i16 - width);
    }
}

#[test]
fn rotation_against_a_settled_stack_is_rejected() {
    let mut field = Field::new();
    // A solid column directly under the spawned horizontal I piece.
    for row in 1..FIELD_HEIGHT as i16 {
        field.set(row, 3, 9);
    }

    let mut piece = Piece::spawn(PieceKind::I);
    let before = piece;
    // The vertical orientation would overlap the column.
    assert!(!piece.attempt_rotate(Rotation::Clockwise, &field));
    assert_eq!(piece, before);

    // One column to the right, the same rotation fits.
    assert!(piece.attempt_move(1, 0, &field));
    assert!(piece.attempt_rotate(Rotation::Clockwise, &field));
}

#[test]
fn s_and_z_alternate_between_two_orientations() {
    let field = Field::new();
    for kind in [PieceKind::S, PieceKind::Z] {
        let mut piece = Piece::spawn(kind);
        piece.attempt_move(0, 5, &field);

        assert!(piece.attempt_rotate(Rotation::Clockwise, &field));
        assert_eq!(piece.orientation(), 1);
        assert!(piece.attempt_rotate(Rotation::Clockwise, &field));
        assert_eq!(piece.orientation(), 0);
    }
}
