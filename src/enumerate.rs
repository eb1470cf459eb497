//! Walk through the step patterns for each polygon size, keeping one representative of each
//! distinct shape.

use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, info};

use crate::{ShapeKey, Star, StarError, Steps};

/// Configuration for which stars get enumerated
#[derive(Debug, Clone)]
pub struct EnumerationOpts {
    /// Smallest polygon size to enumerate (at least 3)
    pub min_size: usize,
    /// Largest polygon size to enumerate (inclusive)
    pub max_size: usize,
    /// Whether to try every two-step pattern `[s0, s1]` after the single-step stars
    pub double_steps: bool,
    /// Whether to also try every three-step pattern `[s0, s1, s2]`.  This is slow and produces a
    /// lot of shapes, so it's off by default.
    pub triple_steps: bool,
}

impl EnumerationOpts {
    /// Checks that the polygon sizes describe a non-empty range of real polygons
    pub fn validate(&self) -> Result<(), StarError> {
        if self.min_size < 3 {
            return Err(StarError::TooFewSides(self.min_size));
        }
        if self.min_size > self.max_size {
            return Err(StarError::InvalidSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(())
    }
}

impl Default for EnumerationOpts {
    fn default() -> Self {
        Self {
            min_size: 3,
            max_size: 13,
            double_steps: true,
            triple_steps: false,
        }
    }
}

/// The shapes found so far for a single polygon size.  Each [`ShapeKey`] maps to the step pattern
/// which first produced it.
#[derive(Debug, Clone)]
pub struct SeenShapes {
    size: usize,
    first_steps: HashMap<ShapeKey, Steps>,
}

impl SeenShapes {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            first_steps: HashMap::new(),
        }
    }

    /// Records the shape of `star`, returning `true` if no rotation of it has been seen before.
    ///
    /// # Panics
    ///
    /// Panics if `star` isn't drawn on a polygon of the size that this `SeenShapes` tracks.
    pub fn insert(&mut self, star: &Star) -> bool {
        assert_eq!(star.size(), self.size, "star drawn on the wrong polygon");
        let key = star.shape_key();
        if let Some(first) = self.first_steps.get(&key) {
            debug!(
                "STAR[{}, {}] is the same shape as STAR[{}, {}]",
                self.size,
                star.steps(),
                self.size,
                first
            );
            return false;
        }
        self.first_steps.insert(key, star.steps().clone());
        true
    }

    /// The step pattern which first produced a shape with the given key
    pub fn first_steps(&self, key: &ShapeKey) -> Option<&Steps> {
        self.first_steps.get(key)
    }

    pub fn len(&self) -> usize {
        self.first_steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_steps.is_empty()
    }
}

/// Enumerates the distinct stars for a range of polygon sizes
#[derive(Debug, Clone)]
pub struct Enumerator {
    opts: EnumerationOpts,
}

impl Enumerator {
    pub fn new(opts: EnumerationOpts) -> Result<Self, StarError> {
        opts.validate()?;
        Ok(Self { opts })
    }

    /// The step patterns tried for a polygon with `size` corners, in the order they're tried.
    ///
    /// A single step `s` draws the same shape as `size - s` (just walking the other way round),
    /// so only `1..=size/2` is tried.  Multi-step patterns try every step in `1..size` in every
    /// position.
    pub fn candidate_steps(&self, size: usize) -> Vec<Steps> {
        let mut candidates = (1..=size / 2).map(Steps::single).collect_vec();
        if self.opts.double_steps {
            for (s0, s1) in (1..size).cartesian_product(1..size) {
                candidates.push(Steps::double(s0, s1));
            }
        }
        if self.opts.triple_steps {
            for ((s0, s1), s2) in (1..size).cartesian_product(1..size).cartesian_product(1..size)
            {
                candidates.push(Steps::triple(s0, s1, s2));
            }
        }
        candidates
    }

    /// One representative [`Star`] for each distinct shape (up to rotation) which can be drawn
    /// on a polygon with `size` corners.  Representatives are the first pattern (in the order of
    /// [`Self::candidate_steps`]) which drew that shape.
    pub fn distinct_stars(&self, size: usize) -> Vec<Star> {
        let mut seen = SeenShapes::new(size);
        let mut stars = Vec::new();
        for steps in self.candidate_steps(size) {
            let star = Star::new(size, steps);
            if seen.insert(&star) {
                stars.push(star);
            }
        }
        info!("{} distinct stars with {} corners", stars.len(), size);
        stars
    }

    /// The distinct stars for every polygon size in the configured range, smallest first
    pub fn catalogue(&self) -> Vec<(usize, Vec<Star>)> {
        (self.opts.min_size..=self.opts.max_size)
            .map(|size| (size, self.distinct_stars(size)))
            .collect_vec()
    }
}
