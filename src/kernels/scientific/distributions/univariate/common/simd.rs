// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common SIMD Distribution Utilities**
//!
//! Shared SIMD drivers for univariate distribution kernels. They walk the input in
//! `N`-lane blocks, hand each block to a vector body and finish the tail with the
//! matching scalar body.

use std::simd::{LaneCount, Mask, Simd, SupportedLaneCount};

use minarrow::Bitmask;

use crate::utils::{bitmask_to_simd_mask, is_simd_aligned};

/// SIMD kernel for dense f64->f64 univariate distribution computations
/// (zero-allocation variant).
///
/// ## Parameters
/// - `x`: Input array slice (requires 64-byte alignment for SIMD activation)
/// - `out`: Output buffer (must match input length)
/// - `simd_body`: Vectorised computation function: `Simd<f64, N> -> Simd<f64, N>`
/// - `scalar_body`: Scalar computation function for tail elements: `f64 -> f64`
///
/// ## Panics
/// Panics if `x.len() != out.len()`.
#[inline(always)]
pub fn dense_univariate_kernel_f64_simd_to<const N: usize, FSimd, FScalar>(
    x: &[f64],
    out: &mut [f64],
    simd_body: FSimd,
    scalar_body: FScalar,
) where
    LaneCount<N>: SupportedLaneCount,
    FSimd: Fn(Simd<f64, N>) -> Simd<f64, N>,
    FScalar: Fn(f64) -> f64,
{
    let len = x.len();
    assert_eq!(
        len,
        out.len(),
        "dense_univariate_kernel_f64_simd_to: input/output length mismatch"
    );

    if is_simd_aligned(x) {
        let mut i = 0;
        while i + N <= len {
            let x_v = Simd::<f64, N>::from_slice(&x[i..i + N]);
            let y_v = simd_body(x_v);
            out[i..i + N].copy_from_slice(y_v.as_array());
            i += N;
        }
        // Scalar tail
        for j in i..len {
            out[j] = scalar_body(x[j]);
        }
        return;
    }

    // Scalar fallback - alignment check failed
    for (i, &xi) in x.iter().enumerate() {
        out[i] = scalar_body(xi);
    }
}

/// SIMD kernel for null-aware f64->f64 univariate distribution computations
/// (zero-allocation variant).
///
/// Null lanes are fed `NaN` and their outputs forced to `NaN` after the body runs,
/// so a body that ignores its input (a constant) still leaves nulls as `NaN`.
/// The caller keeps the input mask as the output mask.
///
/// ## Panics
/// Panics if `x.len() != out.len()`.
#[inline(always)]
pub fn masked_univariate_kernel_f64_simd_to<const N: usize, FSimd, FScalar>(
    x: &[f64],
    mask: &Bitmask,
    out: &mut [f64],
    simd_body: FSimd,
    scalar_body: FScalar,
) where
    LaneCount<N>: SupportedLaneCount,
    FSimd: Fn(Simd<f64, N>) -> Simd<f64, N>,
    FScalar: Fn(f64) -> f64,
{
    let len = x.len();
    assert_eq!(
        len,
        out.len(),
        "masked_univariate_kernel_f64_simd_to: input/output length mismatch"
    );
    let mask_bytes = mask.as_bytes();
    let nan_v = Simd::<f64, N>::splat(f64::NAN);

    let mut i = 0;
    if is_simd_aligned(x) {
        while i + N <= len {
            let lane_mask: Mask<i64, N> = bitmask_to_simd_mask::<N, i64>(mask_bytes, i, len);
            let x_v_raw = Simd::<f64, N>::from_slice(&x[i..i + N]);

            // Replace null lanes with NaN
            let x_v_in = lane_mask.select(x_v_raw, nan_v);

            let y_v = lane_mask.select(simd_body(x_v_in), nan_v);
            out[i..i + N].copy_from_slice(y_v.as_array());

            i += N;
        }
    }

    // Scalar tail, or the whole input when unaligned
    for idx in i..len {
        out[idx] = if unsafe { mask.get_unchecked(idx) } {
            scalar_body(x[idx])
        } else {
            f64::NAN
        };
    }
}
