use std::collections::{BTreeSet, HashSet};

use itertools::Itertools;
use log::trace;

use crate::{
    geom,
    indexed_vec::{CornerIdx, IdxType},
    Steps, V2,
};

/// One connected run of corners, drawn as a path.  The closing line from the last corner back to
/// the first is implicit and is **not** stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polyline {
    corners: Vec<CornerIdx>,
}

impl Polyline {
    pub fn new(corners: Vec<CornerIdx>) -> Self {
        Self { corners }
    }

    /// Creates a `Polyline` from raw corner numbers
    pub fn from_idxs(idxs: impl IntoIterator<Item = usize>) -> Self {
        Self::new(idxs.into_iter().map(CornerIdx::from_idx).collect_vec())
    }

    pub fn corners(&self) -> &[CornerIdx] {
        &self.corners
    }

    /// The corner numbers visited by this `Polyline`, in order
    pub fn idxs(&self) -> Vec<usize> {
        self.corners.iter().map(|c| c.to_idx()).collect_vec()
    }

    pub fn len(&self) -> usize {
        self.corners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// Relabels every corner by moving it `amount` corners clockwise round a `size`-gon
    pub fn rotated(&self, amount: usize, size: usize) -> Self {
        Self::new(self.corners.iter().map(|c| c.step(amount, size)).collect_vec())
    }

    /// Returns a copy of this `Polyline`, traversed in the opposite direction
    pub fn reversed(&self) -> Self {
        Self::new(self.corners.iter().rev().copied().collect_vec())
    }
}

/// Walks round a polygon with `size` corners, starting at `start` and stepping clockwise by each
/// of the `steps` in turn (reusing them as needed).  The walk stops just before it would draw a
/// directed line segment that it has already drawn, so the returned [`Polyline`] never repeats a
/// directed edge.  The line from the last corner back to `start` is implicit, so `start` is never
/// stored twice at the end.
///
/// For example, `cycle(0, 6, [2, 5])` visits `[0, 2, 1, 3, 2, 4, 3, 5, 4, 0, 5, 1]`.
pub fn cycle(start: CornerIdx, size: usize, steps: &Steps) -> Polyline {
    // Directed edges are `(prev, next)` pairs; the first edge comes from nowhere to `start`
    let mut edges_seen = HashSet::<(Option<CornerIdx>, CornerIdx)>::new();
    let mut corners = Vec::<CornerIdx>::new();

    let mut prev_corner = None;
    let mut next_corner = start;
    let mut step_num = 0;
    while edges_seen.insert((prev_corner, next_corner)) {
        corners.push(next_corner);

        prev_corner = Some(next_corner);
        next_corner = next_corner.step(steps.nth(step_num), size);
        step_num += 1;
    }
    // The walk usually finishes by stepping back onto `start`, which closes the loop
    if corners.len() > 1 && corners.last() == Some(&start) {
        corners.pop();
    }
    Polyline::new(corners)
}

/// `STAR[size, steps]`: the set of [`Polyline`]s which together visit every corner of a
/// `size`-gon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Star {
    size: usize,
    steps: Steps,
    polylines: Vec<Polyline>,
}

impl Star {
    /// Decomposes `STAR[size, steps]` into [`Polyline`]s.  Each `Polyline` starts at the
    /// lowest-numbered corner which no previous `Polyline` has visited, and we keep going until
    /// every corner has been visited.
    pub fn new(size: usize, steps: Steps) -> Self {
        assert!(size >= 3, "a polygon needs at least 3 sides, not {}", size);

        let mut uncovered = (0..size).map(CornerIdx::from_idx).collect::<BTreeSet<_>>();
        let mut polylines = Vec::new();
        // `pop_first` always takes the smallest uncovered corner
        while let Some(start) = uncovered.pop_first() {
            let poly = cycle(start, size, &steps);
            trace!("STAR[{}, {}]: polyline {:?}", size, steps, poly.idxs());
            for c in poly.corners() {
                uncovered.remove(c);
            }
            polylines.push(poly);
        }

        Self {
            size,
            steps,
            polylines,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn steps(&self) -> &Steps {
        &self.steps
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    /// The [`Polyline`]s as lists of raw corner numbers
    pub fn indices(&self) -> Vec<Vec<usize>> {
        self.polylines.iter().map(Polyline::idxs).collect_vec()
    }

    /// Returns `true` if every corner of the polygon is visited by at least one [`Polyline`]
    pub fn covers_every_corner(&self) -> bool {
        let visited = self
            .polylines
            .iter()
            .flat_map(|p| p.corners().iter().copied())
            .collect::<HashSet<_>>();
        (0..self.size).all(|i| visited.contains(&CornerIdx::from_idx(i)))
    }

    /// Relabels every corner of this `Star` by moving it `amount` corners clockwise
    pub fn rotated(&self, amount: usize) -> Self {
        Self {
            size: self.size,
            steps: self.steps.clone(),
            polylines: self
                .polylines
                .iter()
                .map(|p| p.rotated(amount, self.size))
                .collect_vec(),
        }
    }

    /// Converts each [`Polyline`] into the coordinates of the corners it visits, for a polygon
    /// of the given `radius` centred on `centre`
    pub fn corner_coords(&self, centre: V2, radius: f32) -> Vec<Vec<V2>> {
        let corners = geom::regular_polygon_corners(self.size, centre, radius);
        self.polylines
            .iter()
            .map(|p| p.corners().iter().map(|&c| corners[c]).collect_vec())
            .collect_vec()
    }
}

/// `STAR[size, steps]` as lists of corner numbers.  This is shorthand for [`Star::new`].
pub fn star_indices(size: usize, steps: &Steps) -> Star {
    Star::new(size, steps.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::V2Ext;

    fn indices(size: usize, steps: &[usize]) -> Vec<Vec<usize>> {
        star_indices(size, &Steps::new(steps.to_vec()).unwrap()).indices()
    }

    #[test]
    fn classic_stars() {
        assert_eq!(indices(5, &[2]), vec![vec![0, 2, 4, 1, 3]]); // Pentagram
        assert_eq!(indices(6, &[2]), vec![vec![0, 2, 4], vec![1, 3, 5]]); // Star of David
        assert_eq!(indices(6, &[1]), vec![vec![0, 1, 2, 3, 4, 5]]); // Hexagon
        assert_eq!(indices(6, &[3]), vec![vec![0, 3], vec![1, 4], vec![2, 5]]);
        assert_eq!(
            indices(9, &[3]),
            vec![vec![0, 3, 6], vec![1, 4, 7], vec![2, 5, 8]]
        );
    }

    #[test]
    fn two_step_cycle() {
        let poly = cycle(CornerIdx::from_idx(0), 6, &Steps::new(vec![2, 5]).unwrap());
        assert_eq!(poly.idxs(), vec![0, 2, 1, 3, 2, 4, 3, 5, 4, 0, 5, 1]);
        assert_eq!(indices(6, &[2, 5]), vec![poly.idxs()]);
    }

    #[test]
    fn cycle_stops_before_a_repeated_edge() {
        // 0 -> 3 -> 0 -> 3 would draw 0 -> 3 twice
        let poly = cycle(CornerIdx::from_idx(0), 6, &Steps::new(vec![3, 3]).unwrap());
        assert_eq!(poly.idxs(), vec![0, 3]);
        // 0 -> 2 -> 0 -> 1 -> 3 -> 1 -> 2 -> 0 would draw 2 -> 0 twice, and doesn't end at 0
        let poly = cycle(CornerIdx::from_idx(0), 4, &Steps::new(vec![2, 2, 1]).unwrap());
        assert_eq!(poly.idxs(), vec![0, 2, 0, 1, 3, 1, 2]);
    }

    #[test]
    fn cycle_starts_anywhere() {
        let poly = cycle(CornerIdx::from_idx(3), 5, &Steps::single(2));
        assert_eq!(poly.idxs(), vec![3, 0, 2, 4, 1]);
    }

    #[test]
    fn steps_are_taken_modulo_size() {
        assert_eq!(indices(5, &[7]), indices(5, &[2]));
    }

    #[test]
    fn every_corner_is_covered() {
        for size in 3..16 {
            for step in 1..=size {
                let star = Star::new(size, Steps::single(step));
                assert!(star.covers_every_corner(), "STAR[{}, {}]", size, step);
                // Single-step stars split the corners into disjoint cycles
                let mut all = star.indices().concat();
                all.sort_unstable();
                assert_eq!(all, (0..size).collect_vec(), "STAR[{}, {}]", size, step);
            }
        }
    }

    #[test]
    fn polylines_start_at_smallest_uncovered_corner() {
        let star = Star::new(8, Steps::single(4));
        let starts = star.polylines().iter().map(|p| p.idxs()[0]).collect_vec();
        assert_eq!(starts, vec![0, 1, 2, 3]);
    }

    #[test]
    fn rotation_relabels_corners() {
        let star = Star::new(6, Steps::single(2)).rotated(1);
        assert_eq!(star.indices(), vec![vec![1, 3, 5], vec![2, 4, 0]]);
        assert_eq!(Star::new(6, Steps::single(2)).rotated(6).indices(), indices(6, &[2]));
    }

    #[test]
    fn coords_follow_corners() {
        let star = Star::new(4, Steps::single(2));
        let coords = star.corner_coords(V2::ZERO, 2.0);
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0].len(), 2);
        assert!((coords[0][1].y - 2.0).abs() < 1e-4); // Corner 2 is at the bottom
    }
}
