//! A validated request to turn one layer of the cube, and its notation.
//!
//! Rotations are written `<face>.<layer>[x<turns>][']`. The turn count
//! defaults to one and a trailing `'` makes the rotation counter-clockwise,
//! so `0.1` is a single clockwise quarter turn of the middle layer behind
//! face 0 and `3.0x2'` is a counter-clockwise half turn of face 3.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::geometry::{EDGE_LENGTH, FACE_COUNT};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationError {
    #[error("side out of range")]
    SideOutOfRange,
    #[error("layer out of range")]
    LayerOutOfRange,
    #[error("rotation count must be positive")]
    NonPositiveRotationCount,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRotationError {
    #[error("Empty rotation")]
    Empty,
    #[error("Malformed rotation `{0}`, expected `<face>.<layer>[x<turns>][']`")]
    Malformed(String),
    #[error("Invalid number `{0}` in rotation")]
    InvalidNumber(String),
    #[error("Invalid rotation: {0}")]
    Invalid(#[from] RotationError),
}

/// A quarter-turn count applied to one layer of one face. Construction
/// through [`Rotation::new`] guarantees every field is in range, so applying
/// a `Rotation` cannot fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rotation {
    face: usize,
    layer: usize,
    turns: u32,
    clockwise: bool,
}

impl Rotation {
    /// Validate a rotation request.
    ///
    /// # Errors
    ///
    /// The checks run in order: `face` must be in `0..6`, `layer` must be in
    /// `0..EDGE_LENGTH` and `turns` must be positive.
    pub fn new(face: i32, layer: i32, turns: i32, clockwise: bool) -> Result<Self, RotationError> {
        let face = usize::try_from(face)
            .ok()
            .filter(|&face| face < FACE_COUNT)
            .ok_or(RotationError::SideOutOfRange)?;
        let layer = usize::try_from(layer)
            .ok()
            .filter(|&layer| layer < EDGE_LENGTH)
            .ok_or(RotationError::LayerOutOfRange)?;
        let turns = u32::try_from(turns)
            .ok()
            .filter(|&turns| turns > 0)
            .ok_or(RotationError::NonPositiveRotationCount)?;

        Ok(Rotation {
            face,
            layer,
            turns,
            clockwise,
        })
    }

    /// Build a rotation from fields the caller already knows are in range.
    pub(crate) const fn from_parts(face: usize, layer: usize, turns: u32, clockwise: bool) -> Self {
        debug_assert!(face < FACE_COUNT && layer < EDGE_LENGTH && turns > 0);
        Rotation {
            face,
            layer,
            turns,
            clockwise,
        }
    }

    #[must_use]
    pub const fn face(self) -> usize {
        self.face
    }

    #[must_use]
    pub const fn layer(self) -> usize {
        self.layer
    }

    #[must_use]
    pub const fn turns(self) -> u32 {
        self.turns
    }

    #[must_use]
    pub const fn clockwise(self) -> bool {
        self.clockwise
    }

    /// The same layer turned the same number of times the other way.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Rotation {
            clockwise: !self.clockwise,
            ..self
        }
    }

    /// The number of clockwise quarter turns this rotation amounts to, in
    /// `0..4`. A counter-clockwise turn by `k` is a clockwise turn by `4 - k`.
    #[must_use]
    pub const fn clockwise_quarter_turns(self) -> u32 {
        match self.turns % 4 {
            0 => 0,
            effective if self.clockwise => effective,
            effective => 4 - effective,
        }
    }

    /// Whether applying this rotation leaves every facelet in place.
    #[must_use]
    pub const fn is_identity(self) -> bool {
        self.turns % 4 == 0
    }
}

impl FromStr for Rotation {
    type Err = ParseRotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseRotationError::Empty);
        }

        let (body, clockwise) = match s.strip_suffix('\'') {
            Some(body) => (body, false),
            None => (s, true),
        };
        let (position, turns) = body.split_once('x').unwrap_or((body, "1"));
        let (face, layer) = position
            .split_once('.')
            .ok_or_else(|| ParseRotationError::Malformed(s.to_owned()))?;

        let parse = |text: &str| {
            text.parse::<i32>()
                .map_err(|_| ParseRotationError::InvalidNumber(text.to_owned()))
        };

        Ok(Rotation::new(
            parse(face)?,
            parse(layer)?,
            parse(turns)?,
            clockwise,
        )?)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.face, self.layer)?;
        if self.turns != 1 {
            write!(f, "x{}", self.turns)?;
        }
        if !self.clockwise {
            write!(f, "'")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_order() {
        assert_eq!(Rotation::new(100, 0, 2, true), Err(RotationError::SideOutOfRange));
        assert_eq!(Rotation::new(-1, 0, 2, true), Err(RotationError::SideOutOfRange));
        assert_eq!(Rotation::new(6, 100, -10, true), Err(RotationError::SideOutOfRange));
        assert_eq!(Rotation::new(2, 100, 2, true), Err(RotationError::LayerOutOfRange));
        assert_eq!(Rotation::new(2, 3, -1, true), Err(RotationError::LayerOutOfRange));
        assert_eq!(Rotation::new(2, -1, 1, false), Err(RotationError::LayerOutOfRange));
        assert_eq!(
            Rotation::new(1, 0, -10, true),
            Err(RotationError::NonPositiveRotationCount)
        );
        assert_eq!(
            Rotation::new(1, 0, 0, true),
            Err(RotationError::NonPositiveRotationCount)
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let rotation = Rotation::new(5, 2, 1, false).unwrap();
        assert_eq!(rotation.face(), 5);
        assert_eq!(rotation.layer(), 2);
        assert_eq!(rotation.turns(), 1);
        assert!(!rotation.clockwise());
        assert!(Rotation::new(0, 0, i32::MAX, true).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(RotationError::SideOutOfRange.to_string(), "side out of range");
        assert_eq!(RotationError::LayerOutOfRange.to_string(), "layer out of range");
        assert_eq!(
            RotationError::NonPositiveRotationCount.to_string(),
            "rotation count must be positive"
        );
    }

    #[test]
    fn test_clockwise_quarter_turns() {
        let turns = |turns, clockwise| {
            Rotation::new(0, 0, turns, clockwise)
                .unwrap()
                .clockwise_quarter_turns()
        };
        assert_eq!(turns(1, true), 1);
        assert_eq!(turns(1, false), 3);
        assert_eq!(turns(2, false), 2);
        assert_eq!(turns(3, false), 1);
        assert_eq!(turns(4, true), 0);
        assert_eq!(turns(8, false), 0);
        assert_eq!(turns(9, true), 1);
        assert_eq!(turns(7, false), 1);
    }

    #[test]
    fn test_inverse() {
        let rotation = Rotation::new(3, 1, 2, true).unwrap();
        let inverse = rotation.inverse();
        assert_eq!(inverse.face(), 3);
        assert_eq!(inverse.layer(), 1);
        assert_eq!(inverse.turns(), 2);
        assert!(!inverse.clockwise());
        assert_eq!(inverse.inverse(), rotation);
        assert!(!rotation.is_identity());
        assert!(Rotation::new(3, 1, 4, true).unwrap().is_identity());
    }

    #[test]
    fn test_parse() {
        assert_eq!("0.1".parse::<Rotation>().unwrap(), Rotation::new(0, 1, 1, true).unwrap());
        assert_eq!("2.0x2".parse::<Rotation>().unwrap(), Rotation::new(2, 0, 2, true).unwrap());
        assert_eq!("3.0'".parse::<Rotation>().unwrap(), Rotation::new(3, 0, 1, false).unwrap());
        assert_eq!(" 1.2x3' ".parse::<Rotation>().unwrap(), Rotation::new(1, 2, 3, false).unwrap());

        assert_eq!("".parse::<Rotation>(), Err(ParseRotationError::Empty));
        assert_eq!(
            "01".parse::<Rotation>(),
            Err(ParseRotationError::Malformed("01".to_owned()))
        );
        assert_eq!(
            "a.1".parse::<Rotation>(),
            Err(ParseRotationError::InvalidNumber("a".to_owned()))
        );
        assert_eq!(
            "0.1x".parse::<Rotation>(),
            Err(ParseRotationError::InvalidNumber(String::new()))
        );
        assert_eq!(
            "9.0".parse::<Rotation>(),
            Err(ParseRotationError::Invalid(RotationError::SideOutOfRange))
        );
        assert_eq!(
            "0.0x-2".parse::<Rotation>(),
            Err(ParseRotationError::Invalid(
                RotationError::NonPositiveRotationCount
            ))
        );
    }

    #[test]
    fn test_display() {
        for text in ["0.1", "2.0x2", "3.0'", "1.2x3'", "5.1x10"] {
            let rotation: Rotation = text.parse().unwrap();
            assert_eq!(rotation.to_string(), text);
        }
    }
}
