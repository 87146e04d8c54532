//! Facelet permutations for a single rotation.
//!
//! Everything here works on any `[T; FACELET_COUNT]` with `T: Copy`, so the
//! same code turns a cube of [`crate::Color`]s or an array of labels.

use log::trace;

use crate::{
    adjacency::neighbor,
    geometry::{Direction, EDGE_LENGTH, FACE_CELL_COUNT, FACELET_COUNT, opposite_face},
    rotation::Rotation,
};

/// The order strips are collected in to form the ring around a face.
const RING_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Top,
    Direction::Right,
    Direction::Bottom,
];

const RING_LENGTH: usize = EDGE_LENGTH * RING_ORDER.len();

/// Apply `rotation` to `cells` in place.
pub fn apply<T: Copy>(cells: &mut [T; FACELET_COUNT], rotation: Rotation) {
    if rotation.is_identity() {
        return;
    }

    // The far layer of a face is the near layer of the opposite face, turned
    // the other way around.
    if rotation.layer() == EDGE_LENGTH - 1 {
        let mirrored = Rotation::from_parts(
            opposite_face(rotation.face()),
            0,
            rotation.turns(),
            !rotation.clockwise(),
        );
        apply(cells, mirrored);
        return;
    }

    let n = rotation.clockwise_quarter_turns() as usize;
    trace!(
        "Turning face {} layer {} by {n} clockwise quarter turns",
        rotation.face(),
        rotation.layer()
    );

    if rotation.layer() == 0 {
        rotate_face_clockwise(cells, rotation.face(), n);
    }
    rotate_adjacent_strips_clockwise(cells, rotation.face(), n, rotation.layer());
}

/// Rotate the nine cells of `face` by `n` clockwise quarter turns.
///
/// # Panics
///
/// If `n` is not in `1..4`.
pub fn rotate_face_clockwise<T: Copy>(cells: &mut [T; FACELET_COUNT], face: usize, n: usize) {
    let base = face * FACE_CELL_COUNT;
    let original: [T; FACE_CELL_COUNT] = std::array::from_fn(|i| cells[base + i]);

    let mut k = 0;
    for i in 0..EDGE_LENGTH {
        for j in (0..EDGE_LENGTH).rev() {
            let source = match n {
                1 => j * EDGE_LENGTH + i,
                2 => (EDGE_LENGTH - 1 - i) * EDGE_LENGTH + j,
                3 => (EDGE_LENGTH - 1 - j) * EDGE_LENGTH + (EDGE_LENGTH - 1 - i),
                _ => unreachable!("Face rotations take between 1 and 3 quarter turns, got {n}"),
            };
            cells[base + k] = original[source];
            k += 1;
        }
    }
}

/// Shift the ring of strips bordering `face` at depth `layer` by `n` whole
/// strips.
pub fn rotate_adjacent_strips_clockwise<T: Copy>(
    cells: &mut [T; FACELET_COUNT],
    face: usize,
    n: usize,
    layer: usize,
) {
    let ring = ring_indices(face, layer);

    let mut values = ring.map(|index| cells[index]);
    values.rotate_left(n * EDGE_LENGTH % RING_LENGTH);

    for (index, value) in ring.into_iter().zip(values) {
        cells[index] = value;
    }
}

/// The strips of all four neighbors of `face` at depth `layer`, in
/// [`RING_ORDER`].
#[must_use]
pub fn ring_indices(face: usize, layer: usize) -> [usize; RING_LENGTH] {
    let strips = RING_ORDER.map(|direction| {
        strip_indices(neighbor(face, direction), direction.adjacent(), layer)
    });

    std::array::from_fn(|i| strips[i / EDGE_LENGTH][i % EDGE_LENGTH])
}

/// Flat indices of the strip of `face` that runs along its `direction` edge,
/// `layer` cells in.
#[must_use]
pub fn strip_indices(face: usize, direction: Direction, layer: usize) -> [usize; EDGE_LENGTH] {
    let base = face * FACE_CELL_COUNT;

    let (start, step) = match direction {
        Direction::Top => (base + EDGE_LENGTH, 1),
        Direction::Bottom => (base + EDGE_LENGTH * (EDGE_LENGTH - 1) + layer - EDGE_LENGTH, 1),
        Direction::Left => (base, EDGE_LENGTH),
        Direction::Right => (base + EDGE_LENGTH - 1 - layer, EDGE_LENGTH),
    };

    std::array::from_fn(|i| start + i * step)
}
