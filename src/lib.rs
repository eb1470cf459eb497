//! Enumerate the generalised star polygons which can be drawn on the corners of a regular
//! polygon, discard the ones which are rotations of shapes we've already seen, and draw the rest.
//!
//! `STAR[n, [s0, s1, ...]]` is constructed on the corners of a regular `n`-gon by repeatedly
//! stepping clockwise round the corners by `s0`, then `s1`, etc., reusing the step sizes as many
//! times as needed.  `STAR[5, [2]]` is the pentagram; `STAR[6, [2]]` is the Star of David (two
//! overlapping triangles).

use vector2d::Vector2D;

mod enumerate;
mod error;
pub mod geom;
mod indexed_vec;
mod key;
mod star;
mod steps;
pub mod svg;

pub use enumerate::{EnumerationOpts, Enumerator, SeenShapes};
pub use error::StarError;
pub use indexed_vec::{CornerIdx, CornerVec, IdxType};
pub use key::{edge_set_key, unique_key_for_shape, Edge, ShapeKey};
pub use star::{cycle, star_indices, Polyline, Star};
pub use steps::Steps;

/// Type alias for 2D floating point vectors (in the geometric sense, unlike [`Vec`])
pub type V2 = Vector2D<f32>;

/// Extra constants for [`V2`] which `vector2d` doesn't provide
pub trait V2Ext {
    const ZERO: Self;
}

impl V2Ext for V2 {
    const ZERO: Self = V2 { x: 0.0, y: 0.0 };
}
