//! End-to-end rotation fixtures.
//!
//! The expected layouts are fully enumerated 6-face snapshots of a size-3
//! cube with canonical colours after known move sequences; every cell is
//! checked, not spot samples.

use std::sync::Arc;

use twisty::{
    Cube, CubeSettings, CubeletColour, FaceSide, ReverseMoveHistorySolver, Rotation,
};

const G: CubeletColour = CubeletColour::Green;
const B: CubeletColour = CubeletColour::Blue;
const R: CubeletColour = CubeletColour::Red;
const O: CubeletColour = CubeletColour::Orange;
const W: CubeletColour = CubeletColour::White;
const Y: CubeletColour = CubeletColour::Yellow;

const CW: Rotation = Rotation::Clockwise;
const CCW: Rotation = Rotation::CounterClockwise;

fn canonical_cube() -> Cube {
    Cube::seeded(
        Arc::new(ReverseMoveHistorySolver::new()),
        CubeSettings::new(3).unwrap(),
        42,
    )
}

fn apply(cube: &mut Cube, moves: &[(FaceSide, Rotation)]) {
    for &(side, rotation) in moves {
        cube.execute_move(side, rotation).unwrap();
    }
}

fn assert_face(cube: &Cube, side: FaceSide, expected: [[CubeletColour; 3]; 3]) {
    let got: Vec<Vec<CubeletColour>> = cube
        .face(side)
        .cells()
        .iter()
        .map(|row| row.iter().map(|cell| cell.colour()).collect())
        .collect();
    let want: Vec<Vec<CubeletColour>> = expected.iter().map(|row| row.to_vec()).collect();
    assert_eq!(got, want, "layout mismatch on the {side} face");
}

#[test]
fn cube_has_correct_size() {
    for size in 1..=3 {
        let settings = CubeSettings::new(size).unwrap();
        let cube = Cube::new(Arc::new(ReverseMoveHistorySolver::new()), settings);
        assert_eq!(cube.size(), size);
        assert!(cube.faces().iter().all(|face| face.size() == size));
    }
}

#[test]
fn cube_defaults_to_size_three() {
    let cube = Cube::with_defaults(Arc::new(ReverseMoveHistorySolver::new()));
    assert_eq!(cube.size(), 3);
}

#[test]
fn settings_reject_out_of_range_sizes() {
    assert!(CubeSettings::new(0).is_err());
    assert!(CubeSettings::new(4).is_err());
}

#[test]
fn any_face_rotated_clockwise_four_times_restores_the_cube() {
    for side in FaceSide::ALL {
        let expected = canonical_cube();
        let mut cube = canonical_cube();
        apply(&mut cube, &[(side, CW); 4]);
        assert_eq!(cube.faces(), expected.faces());
    }
}

#[test]
fn any_face_rotated_counter_clockwise_four_times_restores_the_cube() {
    for side in FaceSide::ALL {
        let expected = canonical_cube();
        let mut cube = canonical_cube();
        apply(&mut cube, &[(side, CCW); 4]);
        assert_eq!(cube.faces(), expected.faces());
    }
}

#[test]
fn layout_after_front_right_clockwise() {
    let mut cube = canonical_cube();
    apply(&mut cube, &[(FaceSide::Front, CW), (FaceSide::Right, CW)]);

    assert_face(&cube, FaceSide::Front, [[G, G, R], [G, G, Y], [G, G, Y]]);
    assert_face(&cube, FaceSide::Right, [[W, W, W], [R, R, R], [R, R, R]]);
    assert_face(&cube, FaceSide::Back, [[O, B, B], [W, B, B], [W, B, B]]);
    assert_face(&cube, FaceSide::Left, [[O, O, Y], [O, O, Y], [O, O, Y]]);
    assert_face(&cube, FaceSide::Up, [[W, W, G], [W, W, G], [O, O, G]]);
    assert_face(&cube, FaceSide::Down, [[R, R, B], [Y, Y, B], [Y, Y, B]]);
}

#[test]
fn layout_after_front_right_front_clockwise() {
    let mut cube = canonical_cube();
    apply(
        &mut cube,
        &[
            (FaceSide::Front, CW),
            (FaceSide::Right, CW),
            (FaceSide::Front, CW),
        ],
    );

    assert_face(&cube, FaceSide::Front, [[G, G, G], [G, G, G], [Y, Y, R]]);
    assert_face(&cube, FaceSide::Right, [[O, W, W], [O, R, R], [G, R, R]]);
    assert_face(&cube, FaceSide::Back, [[O, B, B], [W, B, B], [W, B, B]]);
    assert_face(&cube, FaceSide::Left, [[O, O, R], [O, O, R], [O, O, B]]);
    assert_face(&cube, FaceSide::Up, [[W, W, G], [W, W, G], [Y, Y, Y]]);
    assert_face(&cube, FaceSide::Down, [[R, R, W], [Y, Y, B], [Y, Y, B]]);
}

#[test]
fn layout_after_front_right_clockwise_ten_times() {
    let mut cube = canonical_cube();
    for _ in 0..10 {
        apply(&mut cube, &[(FaceSide::Front, CW), (FaceSide::Right, CW)]);
    }

    assert_face(&cube, FaceSide::Front, [[W, G, R], [Y, G, W], [O, B, Y]]);
    assert_face(&cube, FaceSide::Right, [[W, Y, B], [R, R, O], [G, W, Y]]);
    assert_face(&cube, FaceSide::Back, [[W, B, B], [G, B, B], [R, B, B]]);
    assert_face(&cube, FaceSide::Left, [[O, O, G], [O, O, R], [O, O, Y]]);
    assert_face(&cube, FaceSide::Up, [[W, W, R], [W, W, G], [O, R, G]]);
    assert_face(&cube, FaceSide::Down, [[G, R, R], [Y, Y, G], [Y, Y, B]]);
}

#[test]
fn layout_after_up_left_clockwise() {
    let mut cube = canonical_cube();
    apply(&mut cube, &[(FaceSide::Up, CW), (FaceSide::Left, CW)]);

    assert_face(&cube, FaceSide::Front, [[W, R, R], [W, G, G], [W, G, G]]);
    assert_face(&cube, FaceSide::Right, [[B, B, B], [R, R, R], [R, R, R]]);
    assert_face(&cube, FaceSide::Back, [[O, O, Y], [B, B, Y], [B, B, Y]]);
    assert_face(&cube, FaceSide::Left, [[O, O, G], [O, O, G], [O, O, G]]);
    assert_face(&cube, FaceSide::Up, [[B, W, W], [B, W, W], [O, W, W]]);
    assert_face(&cube, FaceSide::Down, [[R, Y, Y], [G, Y, Y], [G, Y, Y]]);
}

#[test]
fn layout_after_one_clockwise_turn_of_every_face() {
    let mut cube = canonical_cube();
    apply(
        &mut cube,
        &[
            (FaceSide::Front, CW),
            (FaceSide::Right, CW),
            (FaceSide::Up, CW),
            (FaceSide::Back, CW),
            (FaceSide::Left, CW),
            (FaceSide::Down, CW),
        ],
    );

    assert_face(&cube, FaceSide::Front, [[B, W, W], [O, G, Y], [Y, Y, R]]);
    assert_face(&cube, FaceSide::Right, [[O, B, B], [R, R, Y], [G, G, Y]]);
    assert_face(&cube, FaceSide::Back, [[W, W, G], [B, B, Y], [R, R, Y]]);
    assert_face(&cube, FaceSide::Left, [[O, W, W], [O, O, G], [B, B, R]]);
    assert_face(&cube, FaceSide::Up, [[Y, R, R], [O, W, W], [O, G, G]]);
    assert_face(&cube, FaceSide::Down, [[G, G, W], [O, Y, R], [O, B, B]]);
}

#[test]
fn layout_after_front_right_counter_clockwise() {
    let mut cube = canonical_cube();
    apply(&mut cube, &[(FaceSide::Front, CCW), (FaceSide::Right, CCW)]);

    assert_face(&cube, FaceSide::Front, [[G, G, W], [G, G, W], [G, G, R]]);
    assert_face(&cube, FaceSide::Right, [[R, R, R], [R, R, R], [Y, Y, Y]]);
    assert_face(&cube, FaceSide::Back, [[Y, B, B], [Y, B, B], [O, B, B]]);
    assert_face(&cube, FaceSide::Left, [[O, O, W], [O, O, W], [O, O, W]]);
    assert_face(&cube, FaceSide::Up, [[W, W, B], [W, W, B], [R, R, B]]);
    assert_face(&cube, FaceSide::Down, [[O, O, G], [Y, Y, G], [Y, Y, G]]);
}

#[test]
fn layout_after_front_right_front_counter_clockwise() {
    let mut cube = canonical_cube();
    apply(
        &mut cube,
        &[
            (FaceSide::Front, CCW),
            (FaceSide::Right, CCW),
            (FaceSide::Front, CCW),
        ],
    );

    assert_face(&cube, FaceSide::Front, [[W, W, R], [G, G, G], [G, G, G]]);
    assert_face(&cube, FaceSide::Right, [[G, R, R], [O, R, R], [O, Y, Y]]);
    assert_face(&cube, FaceSide::Back, [[Y, B, B], [Y, B, B], [O, B, B]]);
    assert_face(&cube, FaceSide::Left, [[O, O, B], [O, O, R], [O, O, R]]);
    assert_face(&cube, FaceSide::Up, [[W, W, B], [W, W, B], [R, R, Y]]);
    assert_face(&cube, FaceSide::Down, [[W, W, W], [Y, Y, G], [Y, Y, G]]);
}

#[test]
fn layout_after_front_right_counter_clockwise_ten_times() {
    let mut cube = canonical_cube();
    for _ in 0..10 {
        apply(&mut cube, &[(FaceSide::Front, CCW), (FaceSide::Right, CCW)]);
    }

    assert_face(&cube, FaceSide::Front, [[O, B, W], [W, G, Y], [Y, G, R]]);
    assert_face(&cube, FaceSide::Right, [[G, Y, W], [R, R, O], [Y, W, B]]);
    assert_face(&cube, FaceSide::Back, [[R, B, B], [G, B, B], [Y, B, B]]);
    assert_face(&cube, FaceSide::Left, [[O, O, W], [O, O, R], [O, O, G]]);
    assert_face(&cube, FaceSide::Up, [[W, W, B], [W, W, G], [G, R, R]]);
    assert_face(&cube, FaceSide::Down, [[O, R, G], [Y, Y, G], [Y, Y, R]]);
}

#[test]
fn layout_after_up_left_counter_clockwise() {
    let mut cube = canonical_cube();
    apply(&mut cube, &[(FaceSide::Up, CCW), (FaceSide::Left, CCW)]);

    assert_face(&cube, FaceSide::Front, [[Y, O, O], [Y, G, G], [Y, G, G]]);
    assert_face(&cube, FaceSide::Right, [[G, G, G], [R, R, R], [R, R, R]]);
    assert_face(&cube, FaceSide::Back, [[R, R, W], [B, B, W], [B, B, W]]);
    assert_face(&cube, FaceSide::Left, [[B, O, O], [B, O, O], [B, O, O]]);
    assert_face(&cube, FaceSide::Up, [[O, W, W], [G, W, W], [G, W, W]]);
    assert_face(&cube, FaceSide::Down, [[B, Y, Y], [B, Y, Y], [R, Y, Y]]);
}

#[test]
fn layout_after_one_counter_clockwise_turn_of_every_face() {
    let mut cube = canonical_cube();
    apply(
        &mut cube,
        &[
            (FaceSide::Front, CCW),
            (FaceSide::Right, CCW),
            (FaceSide::Up, CCW),
            (FaceSide::Back, CCW),
            (FaceSide::Left, CCW),
            (FaceSide::Down, CCW),
        ],
    );

    assert_face(&cube, FaceSide::Front, [[O, O, W], [Y, G, W], [Y, Y, B]]);
    assert_face(&cube, FaceSide::Right, [[G, G, B], [R, R, B], [R, Y, O]]);
    assert_face(&cube, FaceSide::Back, [[R, B, W], [R, B, W], [Y, Y, G]]);
    assert_face(&cube, FaceSide::Left, [[B, W, W], [B, O, O], [Y, G, R]]);
    assert_face(&cube, FaceSide::Up, [[O, O, Y], [G, W, R], [G, W, R]]);
    assert_face(&cube, FaceSide::Down, [[G, G, W], [O, Y, R], [O, B, B]]);
}

#[test]
fn layout_after_mixed_direction_sequence() {
    let mut cube = canonical_cube();
    apply(
        &mut cube,
        &[
            (FaceSide::Front, CW),
            (FaceSide::Right, CCW),
            (FaceSide::Up, CW),
            (FaceSide::Back, CCW),
            (FaceSide::Left, CW),
            (FaceSide::Down, CCW),
        ],
    );

    assert_face(&cube, FaceSide::Front, [[O, R, R], [O, G, W], [W, W, W]]);
    assert_face(&cube, FaceSide::Right, [[Y, B, O], [R, R, W], [O, Y, R]]);
    assert_face(&cube, FaceSide::Back, [[Y, B, W], [O, B, Y], [Y, Y, W]]);
    assert_face(&cube, FaceSide::Left, [[G, Y, Y], [O, O, G], [B, G, O]]);
    assert_face(&cube, FaceSide::Up, [[R, O, G], [B, W, W], [B, B, B]]);
    assert_face(&cube, FaceSide::Down, [[G, G, B], [R, Y, R], [R, G, G]]);
}

#[test]
fn mix_up_executes_the_requested_number_of_moves() {
    for count in [20, 30] {
        let mut cube = canonical_cube();
        cube.mix_up(count, None).unwrap();
        assert_eq!(cube.move_history().len(), count);
        assert!(!cube.solved());
    }
}
