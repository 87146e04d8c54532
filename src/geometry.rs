//! Fixed dimensions of the cube and the in-face directions.

/// The number of facelets along one edge of a face.
pub const EDGE_LENGTH: usize = 3;

/// The number of facelets on a single face.
pub const FACE_CELL_COUNT: usize = EDGE_LENGTH * EDGE_LENGTH;

pub const FACE_COUNT: usize = 6;

/// The number of facelets on the whole cube.
pub const FACELET_COUNT: usize = FACE_COUNT * FACE_CELL_COUNT;

/// The face on the other side of the cube. Faces 0/5, 1/4 and 2/3 are
/// opposite pairs.
#[must_use]
pub const fn opposite_face(face: usize) -> usize {
    FACE_COUNT - 1 - face
}

/// A direction relative to a face's own 3x3 grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = {
        use Direction::*;
        let v = [Top, Bottom, Left, Right];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The perpendicular direction paired with this one (TOP/RIGHT and
    /// BOTTOM/LEFT). Used to line a neighbor's own grid up with the grid of
    /// the face being turned.
    #[must_use]
    pub const fn adjacent(self) -> Self {
        match self {
            Direction::Top => Direction::Right,
            Direction::Bottom => Direction::Left,
            Direction::Left => Direction::Bottom,
            Direction::Right => Direction::Top,
        }
    }
}
