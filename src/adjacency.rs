//! Which face lies across each edge of a face.

use crate::geometry::{Direction, FACE_COUNT, opposite_face};

/// The only adjacency facts written down by hand, as (face, direction,
/// neighbor). Everything else follows from opposite faces and opposite
/// directions.
const SEEDS: [(usize, Direction, usize); 6] = [
    (0, Direction::Top, 1),
    (0, Direction::Right, 2),
    (1, Direction::Right, 0),
    (1, Direction::Top, 2),
    (2, Direction::Top, 0),
    (2, Direction::Right, 1),
];

const UNSET: usize = usize::MAX;

/// `NEIGHBORS[face][direction as usize]`, derived from [`SEEDS`] at compile
/// time.
const NEIGHBORS: [[usize; 4]; FACE_COUNT] = {
    let mut table = [[UNSET; 4]; FACE_COUNT];

    let mut i = 0;
    while i < SEEDS.len() {
        let (face, direction, neighbor) = SEEDS[i];
        table[face][direction as usize] = neighbor;
        i += 1;
    }

    // A seeded face knows one direction on each axis; across from the
    // neighbor in one direction is the opposite of that neighbor.
    let mut face = 0;
    while face < FACE_COUNT {
        let mut d = 0;
        while d < 4 {
            let opposite = Direction::ALL[d].opposite() as usize;
            if table[face][d] == UNSET && table[face][opposite] != UNSET {
                table[face][d] = opposite_face(table[face][opposite]);
            }
            d += 1;
        }
        face += 1;
    }

    // The remaining faces see their opposite face's neighbors in opposite
    // directions.
    face = 0;
    while face < FACE_COUNT {
        let mut d = 0;
        while d < 4 {
            let opposite = Direction::ALL[d].opposite() as usize;
            if table[face][d] == UNSET {
                table[face][d] = table[opposite_face(face)][opposite];
            }
            assert!(table[face][d] != UNSET, "adjacency seeds are incomplete");
            d += 1;
        }
        face += 1;
    }

    table
};

/// The face that shares the `direction` edge of `face`.
///
/// # Panics
///
/// If `face` is not a valid face index.
#[must_use]
pub const fn neighbor(face: usize, direction: Direction) -> usize {
    NEIGHBORS[face][direction as usize]
}
