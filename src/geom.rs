//! Pure geometry: where the corners of a regular polygon sit in 2D space.

use std::f32::consts::PI;

use angle::{Angle, Rad};

use crate::{indexed_vec::CornerVec, V2};

/// Radius used by [`regular_polygon_corners`] callers who don't care about scale
pub const DEFAULT_RADIUS: f32 = 100.0;

/// Returns the positions of the corners of a regular polygon with `sides` sides, centred on
/// `centre`.  Corner 0 is directly above the centre (our y-axis points **down**, so that's the
/// `-y` direction) and the remaining corners follow **clockwise** at `2π / sides` intervals.
pub fn regular_polygon_corners(sides: usize, centre: V2, radius: f32) -> CornerVec<V2> {
    let mut corners = CornerVec::with_capacity(sides);
    for d in 0..sides {
        // Measured clockwise from straight up
        let angle = Rad(d as f32 * (2.0 * PI / sides as f32));
        let direction = V2::new(angle.sin(), -angle.cos());
        corners.push(centre + direction * radius);
    }
    corners
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        indexed_vec::{CornerIdx, IdxType},
        V2Ext,
    };

    fn assert_close(a: V2, b: V2) {
        assert!(
            (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn square_corners_go_clockwise_from_the_top() {
        let corners = regular_polygon_corners(4, V2::ZERO, 1.0);
        assert_eq!(corners.len(), 4);
        let corner = |i| corners[CornerIdx::from_idx(i)];
        assert_close(corner(0), V2::new(0.0, -1.0));
        assert_close(corner(1), V2::new(1.0, 0.0));
        assert_close(corner(2), V2::new(0.0, 1.0));
        assert_close(corner(3), V2::new(-1.0, 0.0));
    }

    #[test]
    fn corners_are_offset_by_centre_and_scaled_by_radius() {
        let centre = V2::new(40.0, 120.0);
        let corners = regular_polygon_corners(7, centre, 36.0);
        for &c in corners.iter() {
            let dist = ((c.x - centre.x).powi(2) + (c.y - centre.y).powi(2)).sqrt();
            assert!((dist - 36.0).abs() < 1e-3);
        }
        assert_close(corners[CornerIdx::from_idx(0)], V2::new(40.0, 84.0));
    }

    #[test]
    fn triangle_with_default_radius() {
        let corners = regular_polygon_corners(3, V2::ZERO, DEFAULT_RADIUS);
        let (sin, cos) = (PI / 3.0).sin_cos();
        assert_close(corners[CornerIdx::from_idx(1)], V2::new(100.0 * sin, 100.0 * cos));
        assert_close(corners[CornerIdx::from_idx(2)], V2::new(-100.0 * sin, 100.0 * cos));
    }
}
