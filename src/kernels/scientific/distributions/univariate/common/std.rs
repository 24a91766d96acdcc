// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::Bitmask;

/// Dense kernel helper (zero-allocation).
///
/// Writes `scalar_body(x[i])` into `out[i]` for every element.
///
/// ### Null handling
/// - Any `NaN` or `inf` values generated in the kernel function
/// are kept verbatim, without `nulling` them in the (optional)
/// mask, given that:
/// 1. These values can represent additional data signal.
/// 2. Handling them requires additional CPU cycles on the hot path.
///
/// Therefore, one can treat them further if needed.
///
/// ## Panics
/// Panics if `x.len() != out.len()`.
#[inline(always)]
pub fn dense_univariate_kernel_f64_std_to<FScalar>(x: &[f64], out: &mut [f64], scalar_body: FScalar)
where
    FScalar: Fn(f64) -> f64,
{
    assert_eq!(
        x.len(),
        out.len(),
        "dense_univariate_kernel_f64_std_to: input/output length mismatch"
    );
    for (o, &xi) in out.iter_mut().zip(x) {
        *o = scalar_body(xi);
    }
}

/// Null-aware masked kernel helper (zero-allocation).
///
/// Null lanes are written as `NaN`; the caller keeps the input mask as the output mask.
///
/// # Safety
/// Uses unchecked mask access; `mask` must cover `x.len()` bits, which
/// `utils::resolve_null_mask` guarantees for every public kernel.
#[inline(always)]
pub fn masked_univariate_kernel_f64_std_to<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    out: &mut [f64],
    scalar_body: FScalar,
) where
    FScalar: Fn(f64) -> f64,
{
    assert_eq!(
        x.len(),
        out.len(),
        "masked_univariate_kernel_f64_std_to: input/output length mismatch"
    );
    for idx in 0..x.len() {
        out[idx] = if unsafe { mask.get_unchecked(idx) } {
            scalar_body(x[idx])
        } else {
            f64::NAN
        };
    }
}

/// Dense kernel helper for element-wise parameters.
///
/// The body receives the element index alongside the value, so per-element
/// parameter arrays can be read in lockstep with `x`.
#[inline(always)]
pub fn dense_indexed_kernel_f64_std_to<FScalar>(x: &[f64], out: &mut [f64], scalar_body: FScalar)
where
    FScalar: Fn(usize, f64) -> f64,
{
    assert_eq!(
        x.len(),
        out.len(),
        "dense_indexed_kernel_f64_std_to: input/output length mismatch"
    );
    for (idx, (o, &xi)) in out.iter_mut().zip(x).enumerate() {
        *o = scalar_body(idx, xi);
    }
}

/// Null-aware counterpart of [`dense_indexed_kernel_f64_std_to`].
///
/// # Safety
/// Uses unchecked mask access; `mask` must cover `x.len()` bits.
#[inline(always)]
pub fn masked_indexed_kernel_f64_std_to<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    out: &mut [f64],
    scalar_body: FScalar,
) where
    FScalar: Fn(usize, f64) -> f64,
{
    assert_eq!(
        x.len(),
        out.len(),
        "masked_indexed_kernel_f64_std_to: input/output length mismatch"
    );
    for idx in 0..x.len() {
        out[idx] = if unsafe { mask.get_unchecked(idx) } {
            scalar_body(idx, x[idx])
        } else {
            f64::NAN
        };
    }
}
