use std::{cmp::Ordering, ops::AddAssign};

use num::Num;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy
{
    /// dot product
    /// d(a, b) = Σ(a_i * b_i)
    ///
    /// Walks both index lists once, so the cost is O(nnz_a + nnz_b).
    #[inline]
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + AddAssign + Copy,
        N: Into<R>,
    {
        let mut result = R::zero();
        let (a_inds, a_vals) = (self.indices(), self.values());
        let (b_inds, b_vals) = (other.indices(), other.values());

        let mut i = 0;
        let mut j = 0;
        while i < a_inds.len() && j < b_inds.len() {
            match a_inds[i].cmp(&b_inds[j]) {
                Ordering::Equal => {
                    result += a_vals[i].into() * b_vals[j].into();
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    /// squared euclidean norm
    #[inline]
    pub fn norm_sq<R>(&self) -> R
    where
        R: Num + AddAssign + Copy,
        N: Into<R>,
    {
        let mut result = R::zero();
        for val in self.values() {
            let val: R = (*val).into();
            result += val * val;
        }
        result
    }

    /// cosine similarity
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    ///
    /// Zero-norm on either side yields 0.0 rather than NaN.
    pub fn cosine_similarity(&self, other: &Self) -> f64
    where
        N: Into<f64>,
    {
        let norm_a: f64 = self.norm_sq();
        let norm_b: f64 = other.norm_sq();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        let dot: f64 = self.dot(other);
        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}

impl ZeroSpVec<f64> {
    /// Scale the vector to unit euclidean length.
    /// Returns the norm before scaling; a zero vector is left untouched.
    pub fn l2_normalize(&mut self) -> f64 {
        let norm = self.norm_sq::<f64>().sqrt();
        if norm > 0.0 && norm != 1.0 {
            *self = self.map_values(|_, val| val / norm);
        }
        norm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_only_counts_shared_indices() {
        let a = ZeroSpVec::from_pairs(5, vec![(0, 1.0_f64), (2, 2.0), (4, 3.0)]);
        let b = ZeroSpVec::from_pairs(5, vec![(1, 7.0_f64), (2, 0.5), (4, 2.0)]);
        let d: f64 = a.dot(&b);
        assert_eq!(d, 2.0 * 0.5 + 3.0 * 2.0);
    }

    #[test]
    fn dot_widens_counts() {
        let a = ZeroSpVec::from_pairs(3, vec![(0, 2u32), (1, 3)]);
        let b = ZeroSpVec::from_pairs(3, vec![(0, 4u32), (1, 5)]);
        let d: u64 = a.dot(&b);
        assert_eq!(d, 23);
        let n: f64 = a.norm_sq();
        assert_eq!(n, 13.0);
    }

    #[test]
    fn cosine_of_zero_vector_is_zero() {
        let a: ZeroSpVec<f64> = ZeroSpVec::from_pairs(3, vec![]);
        let b = ZeroSpVec::from_pairs(3, vec![(1, 1.0_f64)]);
        assert_eq!(a.cosine_similarity(&b), 0.0);
        assert_eq!(a.cosine_similarity(&a), 0.0);
    }

    #[test]
    fn cosine_is_scale_invariant() {
        let a = ZeroSpVec::from_pairs(3, vec![(0, 1.0_f64), (2, 1.0)]);
        let b = ZeroSpVec::from_pairs(3, vec![(0, 10.0_f64), (2, 10.0)]);
        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn l2_normalize_yields_unit_norm() {
        let mut v = ZeroSpVec::from_pairs(4, vec![(0, 3.0_f64), (3, 4.0)]);
        let before = v.l2_normalize();
        assert_eq!(before, 5.0);
        assert_eq!(v.values(), &[0.6, 0.8]);
        assert!((v.norm_sq::<f64>() - 1.0).abs() < 1e-12);

        let mut zero: ZeroSpVec<f64> = ZeroSpVec::from_pairs(4, vec![]);
        assert_eq!(zero.l2_normalize(), 0.0);
        assert_eq!(zero.nnz(), 0);
    }
}
