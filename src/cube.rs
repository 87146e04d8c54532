use std::fmt;

use itertools::Itertools;

use crate::{
    color::Color,
    engine,
    geometry::{EDGE_LENGTH, FACE_CELL_COUNT, FACE_COUNT, FACELET_COUNT},
    rotation::{Rotation, RotationError},
};

/// A 3x3x3 cube. Face `f` occupies cells `9 * f..9 * (f + 1)` in row-major
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    cells: [Color; FACELET_COUNT],
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// An assembled cube.
    #[must_use]
    pub fn new() -> Self {
        Cube {
            cells: std::array::from_fn(|i| Color::of_face(i / FACE_CELL_COUNT)),
        }
    }

    /// Turn `layer` of `face` by `turns` quarter turns.
    ///
    /// # Errors
    ///
    /// If any argument is out of range, see [`Rotation::new`]. The cube is
    /// left untouched in that case.
    pub fn rotate(
        &mut self,
        face: i32,
        layer: i32,
        turns: i32,
        clockwise: bool,
    ) -> Result<(), RotationError> {
        let rotation = Rotation::new(face, layer, turns, clockwise)?;
        self.apply(rotation);
        Ok(())
    }

    pub fn apply(&mut self, rotation: Rotation) {
        engine::apply(&mut self.cells, rotation);
    }

    /// Whether every face is a single color.
    #[must_use]
    pub fn is_assembled(&self) -> bool {
        let mut expected = self.cells[0];

        for (i, &color) in self.cells.iter().enumerate() {
            if i % FACE_CELL_COUNT == 0 {
                expected = color;
            } else if color != expected {
                return false;
            }
        }

        true
    }

    /// A copy of every facelet.
    #[must_use]
    pub fn cells(&self) -> [Color; FACELET_COUNT] {
        self.cells
    }

    /// A copy of one face, or `None` if `face` is not a face index.
    #[must_use]
    pub fn face(&self, face: usize) -> Option<[Color; FACE_CELL_COUNT]> {
        (face < FACE_COUNT)
            .then(|| std::array::from_fn(|i| self.cells[face * FACE_CELL_COUNT + i]))
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (face, cells) in self.cells.chunks(FACE_CELL_COUNT).enumerate() {
            if face != 0 {
                writeln!(f)?;
            }
            writeln!(f, "{face}:")?;
            for row in cells.chunks(EDGE_LENGTH) {
                writeln!(f, "{}", row.iter().join(" "))?;
            }
        }
        Ok(())
    }
}
