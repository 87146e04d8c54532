//! State and rotation mechanics of a 3x3x3 cube.
//!
//! A [`Cube`] holds 54 facelets, six contiguous 3x3 faces stored row-major.
//! Turning a layer permutes the facelets of the face itself (for the outer
//! layer) and of the four strips that border it on the neighboring faces.

pub mod adjacency;
pub mod color;
pub mod cube;
pub mod engine;
pub mod geometry;
pub mod rotation;
pub mod scramble;

pub use color::Color;
pub use cube::Cube;
pub use geometry::Direction;
pub use rotation::{ParseRotationError, Rotation, RotationError};
pub use scramble::{ParseScrambleError, Scramble};
