use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use itertools::Itertools;

use crate::StarError;

/// A non-empty sequence of positive step sizes, reused cyclically while walking round a polygon.
/// A pattern of length 1 is the classic `STAR[n, s]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Steps {
    /// **Invariant**: non-empty, and no step is 0
    steps: Vec<usize>,
}

impl Steps {
    pub fn new(steps: Vec<usize>) -> Result<Self, StarError> {
        if steps.is_empty() {
            return Err(StarError::EmptySteps);
        }
        if steps.contains(&0) {
            return Err(StarError::ZeroStep);
        }
        Ok(Self { steps })
    }

    /// The pattern `[step]`
    pub fn single(step: usize) -> Self {
        assert_ne!(step, 0, "`step` can't be 0");
        Self { steps: vec![step] }
    }

    /// The pattern `[s0, s1]`
    pub fn double(s0: usize, s1: usize) -> Self {
        assert!(s0 != 0 && s1 != 0, "steps can't be 0");
        Self {
            steps: vec![s0, s1],
        }
    }

    /// The pattern `[s0, s1, s2]`
    pub fn triple(s0: usize, s1: usize, s2: usize) -> Self {
        assert!(s0 != 0 && s1 != 0 && s2 != 0, "steps can't be 0");
        Self {
            steps: vec![s0, s1, s2],
        }
    }

    /// The step taken on move number `i` (counting from 0), wrapping round the pattern
    pub(crate) fn nth(&self, i: usize) -> usize {
        self.steps[i % self.steps.len()]
    }

    #[allow(clippy::len_without_is_empty)] // A `Steps` is never empty
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.steps
    }
}

/// Parses comma-separated step sizes, e.g. `"2"` or `"2, 5"`
impl FromStr for Steps {
    type Err = StarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let steps = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|_| StarError::InvalidStep(part.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(steps)
    }
}

/// Formats as the label drawn next to each star (e.g. `2` or `2,5`)
impl Display for Steps {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.steps.iter().join(","))
    }
}
