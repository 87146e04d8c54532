//! Sequences of rotations.
//!
//! `Cube` has no way to shuffle itself. Randomizing a cube means generating
//! a [`Scramble`] from a seeded RNG and applying it, which keeps the result
//! reproducible and lets the caller undo it with [`Scramble::inverse`].

use std::{fmt, str::FromStr};

use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::{
    cube::Cube,
    geometry::{EDGE_LENGTH, FACE_COUNT},
    rotation::{ParseRotationError, Rotation},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not parse rotation {index} of the scramble: {source}")]
pub struct ParseScrambleError {
    pub index: usize,
    pub source: ParseRotationError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Scramble {
    rotations: Vec<Rotation>,
}

impl Scramble {
    #[must_use]
    pub fn new(rotations: Vec<Rotation>) -> Self {
        Scramble { rotations }
    }

    /// `len` rotations with a uniformly random face, layer, direction and a
    /// turn count between one and four.
    pub fn random(rng: &mut fastrand::Rng, len: usize) -> Self {
        let rotations = (0..len)
            .map(|_| {
                Rotation::from_parts(
                    rng.usize(0..FACE_COUNT),
                    rng.usize(0..EDGE_LENGTH),
                    rng.u32(1..=4),
                    rng.bool(),
                )
            })
            .collect_vec();

        debug!(
            "Generated scramble of {len} rotations: {}",
            rotations.iter().join(" ")
        );

        Scramble { rotations }
    }

    #[must_use]
    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    pub fn apply_to(&self, cube: &mut Cube) {
        for &rotation in &self.rotations {
            cube.apply(rotation);
        }
    }

    /// The rotations that undo this scramble: the same rotations in reverse
    /// order, each turned the other way.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.rotations.iter().rev().map(|r| r.inverse()).collect()
    }
}

impl FromIterator<Rotation> for Scramble {
    fn from_iter<I: IntoIterator<Item = Rotation>>(iter: I) -> Self {
        Scramble {
            rotations: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Scramble {
    type Err = ParseScrambleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .enumerate()
            .map(|(index, text)| {
                text.parse::<Rotation>()
                    .map_err(|source| ParseScrambleError { index, source })
            })
            .collect()
    }
}

impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rotations.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_random_is_reproducible() {
        let a = Scramble::random(&mut fastrand::Rng::with_seed(7), 50);
        let b = Scramble::random(&mut fastrand::Rng::with_seed(7), 50);
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        assert!(a.rotations().iter().all(|r| (1..=4).contains(&r.turns())));
    }

    #[test_log::test]
    fn test_inverse_undoes_scramble() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for len in [0, 1, 10, 100] {
            let scramble = Scramble::random(&mut rng, len);
            let mut cube = Cube::new();
            scramble.apply_to(&mut cube);
            scramble.inverse().apply_to(&mut cube);
            assert!(cube.is_assembled());
            assert_eq!(cube, Cube::new());
        }
    }

    #[test]
    fn test_inverse_order() {
        let scramble: Scramble = "0.0 1.1x2 2.2'".parse().unwrap();
        assert_eq!(scramble.inverse().to_string(), "2.2 1.1x2' 0.0'");
        assert_eq!(scramble.inverse().inverse(), scramble);
    }

    #[test]
    fn test_parse() {
        let scramble: Scramble = "  0.1   3.0x3'\n5.2 ".parse().unwrap();
        assert_eq!(scramble.to_string(), "0.1 3.0x3' 5.2");

        assert!("".parse::<Scramble>().unwrap().is_empty());
        assert_eq!(
            "0.1 7.0".parse::<Scramble>(),
            Err(ParseScrambleError {
                index: 1,
                source: ParseRotationError::Invalid(crate::RotationError::SideOutOfRange),
            })
        );
    }

    #[test]
    fn test_new_and_collect_agree() {
        let rotations = vec![
            Rotation::new(0, 0, 1, true).unwrap(),
            Rotation::new(4, 1, 2, false).unwrap(),
        ];
        assert_eq!(
            Scramble::new(rotations.clone()),
            rotations.into_iter().collect::<Scramble>()
        );
    }
}
