use std::fmt::{self, Display};

use crate::geometry::FACE_COUNT;

/// The color of a facelet. An assembled cube has face `i` entirely in
/// `Color::ALL[i]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    White,
    Orange,
    Yellow,
}

impl Color {
    pub const ALL: [Self; FACE_COUNT] = {
        use Color::*;
        let v = [Red, Green, Blue, White, Orange, Yellow];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The color every facelet of `face` has on an assembled cube.
    ///
    /// # Panics
    ///
    /// If `face` is not a valid face index.
    #[must_use]
    pub const fn of_face(face: usize) -> Self {
        Self::ALL[face]
    }

    /// The single letter used when printing a cube.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::White => 'w',
            Color::Orange => 'o',
            Color::Yellow => 'y',
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
