pub mod math;

use std::fmt::{self, Debug};
use std::ops::Index;

use num::Num;

/// ZeroSpVec is a sparse vector that omits zero elements.
/// It holds `inds` and `vals`:
/// `inds` keeps the logical index of every stored element,
/// `vals` keeps the matching value.
///
/// Elements are guaranteed to be sorted by ascending index,
/// and no stored value is ever zero.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where N: Num
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
    zero: N,
}

impl<N> ZeroSpVec<N>
where N: Num
{
    #[inline]
    pub fn new() -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len: 0,
            zero: N::zero(),
        }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len: 0,
            zero: N::zero(),
        }
    }

    /// Build from `(index, value)` pairs in any order.
    /// Zero values are dropped and the logical length is set to `len`.
    ///
    /// # Panics
    /// debug builds assert that every index is `< len` and unique
    pub fn from_pairs(len: usize, mut pairs: Vec<(usize, N)>) -> Self {
        pairs.retain(|(_, val)| !val.is_zero());
        pairs.sort_unstable_by_key(|(idx, _)| *idx);
        debug_assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0), "duplicate index");
        debug_assert!(pairs.last().map_or(true, |(idx, _)| *idx < len), "index out of bounds");

        let mut vec = Self::with_capacity(pairs.len());
        for (idx, val) in pairs {
            vec.inds.push(idx);
            vec.vals.push(val);
        }
        vec.len = len;
        vec
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// logical dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// number of stored (non-zero) elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// Append one element at the end of the logical vector.
    /// Zero is only counted in `len`, not stored.
    #[inline]
    pub fn push(&mut self, elem: N) {
        if !elem.is_zero() {
            self.inds.push(self.len);
            self.vals.push(elem);
        }
        self.len += 1;
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&index) {
            Ok(pos) => Some(&self.vals[pos]),
            Err(_) => Some(&self.zero),
        }
    }

    /// Iterate over every logical element, zeros included.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &N> + '_ {
        (0..self.len).map(move |i| match self.inds.binary_search(&i) {
            Ok(pos) => &self.vals[pos],
            Err(_) => &self.zero,
        })
    }

    /// Iterate over stored `(index, value)` pairs only.
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter())
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.inds
    }

    #[inline]
    pub fn values(&self) -> &[N] {
        &self.vals
    }

    /// Apply `f` to every stored element.
    /// Results that become zero are dropped, so the non-zero invariant holds.
    pub fn map_values<M, F>(&self, mut f: F) -> ZeroSpVec<M>
    where
        M: Num,
        N: Copy,
        F: FnMut(usize, N) -> M,
    {
        let mut out = ZeroSpVec::with_capacity(self.nnz());
        for (idx, val) in self.raw_iter() {
            let mapped = f(idx, *val);
            if !mapped.is_zero() {
                out.inds.push(idx);
                out.vals.push(mapped);
            }
        }
        out.len = self.len;
        out
    }

    /// Drop stored elements for which `keep` returns false.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize, &N) -> bool,
    {
        let mut write = 0;
        for read in 0..self.inds.len() {
            if keep(self.inds[read], &self.vals[read]) {
                self.inds.swap(write, read);
                self.vals.swap(write, read);
                write += 1;
            }
        }
        self.inds.truncate(write);
        self.vals.truncate(write);
    }
}

impl<N> Default for ZeroSpVec<N>
where N: Num
{
    fn default() -> Self {
        ZeroSpVec::new()
    }
}

impl<N> From<Vec<N>> for ZeroSpVec<N>
where N: Num
{
    fn from(vec: Vec<N>) -> Self {
        let mut sp = ZeroSpVec::with_capacity(vec.len());
        for elem in vec {
            sp.push(elem);
        }
        sp
    }
}

impl<N> Index<usize> for ZeroSpVec<N>
where N: Num
{
    type Output = N;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("index out of bounds")
    }
}

impl<N: Num + Debug> Debug for ZeroSpVec<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.sign_plus() {
            f.debug_struct("ZeroSpVec")
                .field("len", &self.len)
                .field("nnz", &self.nnz())
                .field("inds", &self.inds)
                .field("vals", &self.vals)
                .finish()
        } else {
            write!(f, "[")?;
            let mut first = true;
            for (idx, val) in self.raw_iter() {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {:?}", idx, val)?;
                first = false;
            }
            write!(f, "]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_skips_zero_but_counts_len() {
        let mut v: ZeroSpVec<u32> = ZeroSpVec::new();
        v.push(0);
        v.push(3);
        v.push(0);
        v.push(5);
        assert_eq!(v.len(), 4);
        assert_eq!(v.nnz(), 2);
        assert_eq!(v.indices(), &[1, 3]);
        assert_eq!(v.get(0), Some(&0));
        assert_eq!(v.get(3), Some(&5));
        assert_eq!(v.get(4), None);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![0, 3, 0, 5]);
    }

    #[test]
    fn from_pairs_sorts_and_drops_zero() {
        let v = ZeroSpVec::from_pairs(6, vec![(4, 2.0_f64), (1, 0.0), (0, 1.5)]);
        assert_eq!(v.len(), 6);
        assert_eq!(v.indices(), &[0, 4]);
        assert_eq!(v.values(), &[1.5, 2.0]);
        assert_eq!(v[1], 0.0);
    }

    #[test]
    fn map_values_keeps_non_zero_invariant() {
        let v = ZeroSpVec::from_pairs(5, vec![(0, 1u32), (2, 2), (4, 3)]);
        let mapped: ZeroSpVec<f64> = v.map_values(|idx, c| if idx == 2 { 0.0 } else { c as f64 * 0.5 });
        assert_eq!(mapped.len(), 5);
        assert_eq!(mapped.indices(), &[0, 4]);
        assert_eq!(mapped.values(), &[0.5, 1.5]);
    }

    #[test]
    fn retain_preserves_order() {
        let mut v = ZeroSpVec::from_pairs(10, vec![(1, 1.0_f64), (3, 1e-15), (7, 2.0)]);
        v.retain(|_, val| val.abs() > 1e-12);
        assert_eq!(v.indices(), &[1, 7]);
        assert_eq!(v.values(), &[1.0, 2.0]);
        assert_eq!(v.len(), 10);
    }

    #[test]
    fn from_dense_vec() {
        let v = ZeroSpVec::from(vec![0u32, 0, 9]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.nnz(), 1);
        assert_eq!(format!("{:?}", v), "[2: 9]");
    }
}
