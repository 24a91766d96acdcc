// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Utilities** - *Shared Drivers and Testing Infrastructure*
//!
//! Element-wise drivers shared by the univariate kernels, one per execution path:
//! - **`std`**: sequential loops over a scalar body
//! - **`simd`**: `W64`-lane blocks over a vector body, scalar tail (feature `simd`)
//! - **`parallel`**: chunked evaluation on the rayon pool (feature `parallel`)
//!
//! ## Test Macros
//! The `common_tests!` macro generates the standard empty-input, bulk-vs-scalar and
//! mask-propagation tests for a kernel.

#[cfg(feature = "parallel")]
pub mod parallel;
#[cfg(feature = "simd")]
pub mod simd;
/// Scalar implementations of common distribution utilities.
pub mod std;

#[cfg(test)]
pub(crate) mod test_helpers {
    use minarrow::{Bitmask, Buffer, FloatArray};

    /// Test Helper: unwrap `FloatArray`, assert *no* null mask, return data.
    pub fn dense_data(arr: FloatArray<f64>) -> Buffer<f64> {
        assert!(arr.null_mask.is_none(), "unexpected mask on dense path");
        arr.data
    }

    /// Create a mask of given length with exactly the lane `idx` null.
    pub fn single_null_mask(len: usize, idx: usize) -> Bitmask {
        let mut m = Bitmask::new_set_all(len, true);
        unsafe { m.set_unchecked(idx, false) };
        m
    }

    /// Assert relative difference ≤ `tol`, absolute when the expectation is zero.
    pub fn assert_close(a: f64, b: f64, tol: f64) {
        let err = if b == 0.0 { a.abs() } else { ((a - b) / b).abs() };
        assert!(
            err <= tol,
            "assert_close failed: {} vs {} (tol={})",
            a,
            b,
            tol
        );
    }
}

/// Generate the three most-common tests (empty-input, bulk-vs-scalar,
/// mask propagation) for a kernel closure
/// `|x: &[f64], mask: Option<&Bitmask>, count: Option<usize>| -> FloatArray<f64>`
/// and the scalar function it must agree with.
///
/// Usage:
/// ```ignore
/// common_tests!(
///     landau_unit,
///     |x, m, c| landau_pdf(x, 1.0, 0.0, m, c).unwrap(),
///     |x| landau_pdf_scalar(x, 1.0, 0.0)
/// );
/// ```
#[cfg(test)]
#[macro_export]
macro_rules! common_tests {
    ($name:ident, $call:expr, $scalar:expr) => {
        mod $name {
            use super::*;
            use $crate::kernels::scientific::distributions::univariate::common::test_helpers as helpers;

            #[test]
            fn empty_input() {
                let arr = ($call)(&[], None, None);
                assert!(arr.data.is_empty());
                assert!(arr.null_mask.is_none());
            }

            #[test]
            fn bulk_vs_scalar_consistency() {
                let xs = minarrow::vec64![-8.0, -3.0, -1.0, -0.2, 0.0, 1.0, 2.0, 7.0, 30.0, 120.0, 400.0];
                let bulk = helpers::dense_data(($call)(&xs, None, None));
                for (i, &x) in xs.iter().enumerate() {
                    assert_eq!(bulk[i].to_bits(), ($scalar)(x).to_bits(), "x = {}", x);
                }
            }

            #[test]
            fn mask_propagation() {
                let xs = minarrow::vec64![1.0, 2.0, 3.0];
                let mask = helpers::single_null_mask(3, 1); // middle lane null
                let arr = ($call)(&xs, Some(&mask), Some(1));
                // lane 1 -> NaN + null
                assert!(!arr.null_mask.as_ref().unwrap().get(1));
                assert!(arr.null_mask.as_ref().unwrap().get(0));
                assert!(arr.data[1].is_nan());
                helpers::assert_close(arr.data[0], ($scalar)(1.0), 1e-15);
                helpers::assert_close(arr.data[2], ($scalar)(3.0), 1e-15);
            }
        }
    };
}
