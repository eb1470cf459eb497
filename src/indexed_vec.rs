//! Type-safe indexing for the corners of a polygon.  A corner is identified only by its position
//! around the polygon, so [`CornerIdx`] is an opaque new-type over an integer in `0..size`.
//! [`CornerVec`] is a replacement for [`Vec`] which can only be indexed by [`CornerIdx`].

use std::{
    fmt::{Debug, Display, Formatter},
    marker::PhantomData,
    ops::Index,
};

/// A new-type over [`Vec`] which will only accept indices of an opaque index type
#[derive(Debug, Clone, PartialEq)]
pub struct TypedVec<Idx, T> {
    inner: Vec<T>,
    _phantom_data: PhantomData<Idx>,
}

impl<Idx, T> TypedVec<Idx, T> {
    /// Creates a new, empty type-safe collection which can take `cap` items without reallocating.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Vec::with_capacity(cap),
            _phantom_data: PhantomData,
        }
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Adds a new element to this collection, returning its opaque index
    pub fn push(&mut self, t: T) -> Idx
    where
        Idx: IdxType,
    {
        let idx = Idx::from_idx(self.inner.len());
        self.inner.push(t);
        idx
    }

    pub fn get(&self, idx: Idx) -> Option<&T>
    where
        Idx: IdxType,
    {
        self.inner.get(idx.to_idx())
    }

    pub fn iter(&self) -> std::slice::Iter<T> {
        self.inner.iter()
    }
}

impl<IdxT: IdxType, T> Index<IdxT> for TypedVec<IdxT, T> {
    type Output = T;

    fn index(&self, index: IdxT) -> &Self::Output {
        self.get(index).unwrap()
    }
}

/// An index type used for referring to the corners of a regular polygon
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CornerIdx {
    idx: usize,
}

impl CornerIdx {
    /// The corner reached by moving `step` corners clockwise from `self` around a polygon with
    /// `size` corners.  `step` is taken modulo `size`.
    pub fn step(self, step: usize, size: usize) -> Self {
        Self::from_idx((self.idx + step % size) % size)
    }
}

impl IdxType for CornerIdx {
    fn from_idx(idx: usize) -> Self {
        Self { idx }
    }

    fn to_idx(self) -> usize {
        self.idx
    }
}

/// Collection of values stored per corner of a polygon
pub type CornerVec<T> = TypedVec<CornerIdx, T>;

impl Debug for CornerIdx {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "CornerIdx({})", self.idx)
    }
}

impl Display for CornerIdx {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.idx)
    }
}

/// A common trait implemented by all custom index types
pub trait IdxType {
    fn from_idx(idx: usize) -> Self;

    fn to_idx(self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps_round_the_polygon() {
        let c = CornerIdx::from_idx(4);
        assert_eq!(c.step(2, 6).to_idx(), 0);
        assert_eq!(c.step(1, 5).to_idx(), 0);
        assert_eq!(c.step(13, 6).to_idx(), 5);
    }

    #[test]
    fn typed_vec_indexes_by_corner() {
        let mut v = CornerVec::with_capacity(2);
        let a = v.push('a');
        let b = v.push('b');
        assert_eq!(v[a], 'a');
        assert_eq!(v[b], 'b');
        assert_eq!(v.len(), 2);
        assert_eq!(v.get(CornerIdx::from_idx(2)), None);
    }
}
