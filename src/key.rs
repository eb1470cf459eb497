//! Canonical string keys for stars, used to spot shapes which we've already drawn.

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::{indexed_vec::CornerIdx, Polyline, Star};

/// A line drawn between two distinct corners.  `Edge`s are undirected, so the endpoints are
/// always stored in ascending order.  The derived [`Ord`] sorts by smaller endpoint, then by
/// larger endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    lo: CornerIdx,
    hi: CornerIdx,
}

impl Edge {
    /// The `Edge` joining `a` and `b`, or `None` if `a == b` (which wouldn't draw anything)
    pub fn between(a: CornerIdx, b: CornerIdx) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { lo: a, hi: b }),
            std::cmp::Ordering::Greater => Some(Self { lo: b, hi: a }),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.lo, self.hi)
    }
}

/// Returns a canonical string describing the lines drawn by `polylines`, e.g. `"0,2; 1,3; 2,4"`.
/// Any two sets of `polylines` which draw the same line segments (in any order or direction) get
/// the same key.
///
/// Each [`Polyline`] is drawn closed, so the line from its last corner back to its first counts
/// as well.
pub fn edge_set_key(polylines: &[Polyline]) -> String {
    polylines
        .iter()
        .flat_map(|poly| poly.corners().iter().circular_tuple_windows())
        .filter_map(|(&a, &b)| Edge::between(a, b))
        .unique()
        .sorted()
        .join("; ")
}

/// The identity of a shape, up to rotation.  Two stars which are rotations of one another always
/// have the same `ShapeKey`.  Mirror images are **not** detected, and may have different keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeKey(String);

impl ShapeKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ShapeKey {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes the [`ShapeKey`] of the star drawn by `polylines` on a `size`-gon: the
/// lexicographically smallest [`edge_set_key`] over all `size` rotations of the corners.
pub fn unique_key_for_shape(size: usize, polylines: &[Polyline]) -> ShapeKey {
    let min_key = (0..size)
        .map(|amount| {
            let rotated = polylines
                .iter()
                .map(|poly| poly.rotated(amount, size))
                .collect_vec();
            edge_set_key(&rotated)
        })
        .min()
        .unwrap_or_default(); // Only a 0-gon has no rotations
    ShapeKey(min_key)
}

impl Star {
    /// This `Star`'s identity up to rotation.  See [`unique_key_for_shape`].
    pub fn shape_key(&self) -> ShapeKey {
        unique_key_for_shape(self.size(), self.polylines())
    }
}
