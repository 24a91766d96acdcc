// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Null Handling, Alignment and Broadcasting Helpers*
//!
//! Small helpers shared by every kernel: null-mask resolution, length checks,
//! SIMD alignment and the scalar/array [`Operand`] used for parameter broadcasting.

#[cfg(feature = "simd")]
use std::simd::{LaneCount, Mask, MaskElement, SimdElement, SupportedLaneCount};

use minarrow::Bitmask;

use crate::errors::{KernelError, log_length_mismatch};

/// Extracts a core::SIMD `Mask<M, N>` for a batch of N lanes from a Minarrow `Bitmask`.
///
/// - `mask_bytes`: packed Arrow validity bits (LSB=index 0, bit=1 means valid)
/// - `offset`: starting index (bit offset into the mask)
/// - `logical_len`: number of logical bits in the mask
/// - `M`: SIMD mask type (i64 for f64)
///
/// Bits outside the logical length are treated as valid.
#[cfg(feature = "simd")]
#[inline(always)]
pub fn bitmask_to_simd_mask<const N: usize, M>(
    mask_bytes: &[u8],
    offset: usize,
    logical_len: usize,
) -> Mask<M, N>
where
    LaneCount<N>: SupportedLaneCount,
    M: MaskElement + SimdElement,
{
    let lane_limit = (offset + N).min(logical_len);
    let n_lanes = lane_limit - offset;
    let mut bits: u64 = 0;
    for j in 0..n_lanes {
        let idx = offset + j;
        let byte = mask_bytes[idx >> 3];
        if ((byte >> (idx & 7)) & 1) != 0 {
            bits |= 1u64 << j;
        }
    }
    if n_lanes < N {
        bits |= !0u64 << n_lanes;
    }
    Mask::<M, N>::from_bitmask(bits)
}

/// Determines whether nulls are present given an optional null count and mask reference.
/// Avoids computing mask cardinality to preserve performance guarantees.
#[inline(always)]
pub fn has_nulls(null_count: Option<usize>, mask: Option<&Bitmask>) -> bool {
    match null_count {
        Some(n) => n > 0,
        None => mask.is_some(),
    }
}

/// Picks the null-aware path for a kernel call.
///
/// Returns `Ok(None)` for the dense path and `Ok(Some(mask))` when nulls may be present.
/// A positive `null_count` without a mask, or a mask shorter than the input,
/// is rejected here so the hot loops can index the mask unchecked.
#[inline(always)]
pub fn resolve_null_mask<'a>(
    fname: &str,
    len: usize,
    null_mask: Option<&'a Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<&'a Bitmask>, KernelError> {
    if !has_nulls(null_count, null_mask) {
        return Ok(None);
    }
    let mask = null_mask.ok_or_else(|| {
        KernelError::InvalidArguments(format!("{}: null_count > 0 requires null_mask", fname))
    })?;
    confirm_mask_capacity(fname, len, mask)?;
    Ok(Some(mask))
}

/// Checks the mask covers every input element.
/// Used so we can avoid bounds checks in the hot loop
#[inline(always)]
pub fn confirm_mask_capacity(fname: &str, cmp_len: usize, mask: &Bitmask) -> Result<(), KernelError> {
    if mask.len() < cmp_len {
        return Err(KernelError::InvalidArguments(format!(
            "{}: null_mask covers {} elements, input has {}",
            fname,
            mask.len(),
            cmp_len
        )));
    }
    Ok(())
}

/// Output validity mask for a kernel result of `len` elements.
///
/// A caller mask may cover more bits than the input; the result keeps the first `len`
/// so mask and data lengths agree.
#[inline]
pub fn output_null_mask(mask: &Bitmask, len: usize) -> Bitmask {
    if mask.len() == len {
        return mask.clone();
    }
    let mut out = Bitmask::new_set_all(len, true);
    for i in 0..len.min(mask.len()) {
        if !mask.get(i) {
            out.set(i, false);
        }
    }
    out
}

/// Validates that two lengths are equal.
///
/// # Returns
/// `Ok(())` if lengths are equal, otherwise `KernelError::LengthMismatch` with diagnostic details.
#[inline(always)]
pub fn confirm_equal_len(label: &str, a: usize, b: usize) -> Result<(), KernelError> {
    if a != b {
        return Err(KernelError::LengthMismatch(log_length_mismatch(label, a, b)));
    }
    Ok(())
}

/// SIMD Alignment check. Returns true if the slice is properly
/// 64-byte aligned for SIMD operations, false otherwise.
#[inline(always)]
pub fn is_simd_aligned<T>(slice: &[T]) -> bool {
    if slice.is_empty() {
        true
    } else {
        (slice.as_ptr() as usize) % 64 == 0
    }
}

/// A kernel parameter that is either one value for every element or one value per element.
///
/// Scalars broadcast against the input array; arrays must match its length.
///
/// ```rust,ignore
/// use landau_kernels::utils::Operand;
///
/// let mpv: Operand = 1.5_f64.into();
/// let sigmas = [0.5, 0.75, 1.0];
/// let sigma: Operand = sigmas.as_slice().into();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Scalar(f64),
    Array(&'a [f64]),
}

impl<'a> Operand<'a> {
    /// Value for element `idx`. Array operands must already be length-checked.
    #[inline(always)]
    pub fn at(&self, idx: usize) -> f64 {
        match self {
            Operand::Scalar(v) => *v,
            Operand::Array(a) => a[idx],
        }
    }

    /// The broadcast value, if this operand is a scalar.
    #[inline]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Operand::Scalar(v) => Some(*v),
            Operand::Array(_) => None,
        }
    }

    /// Errors with `LengthMismatch` when an array operand does not have `len` elements.
    #[inline]
    pub fn confirm_len(&self, label: &str, len: usize) -> Result<(), KernelError> {
        match self {
            Operand::Scalar(_) => Ok(()),
            Operand::Array(a) => confirm_equal_len(label, len, a.len()),
        }
    }
}

impl From<f64> for Operand<'_> {
    fn from(v: f64) -> Self {
        Operand::Scalar(v)
    }
}

impl<'a> From<&'a [f64]> for Operand<'a> {
    fn from(a: &'a [f64]) -> Self {
        Operand::Array(a)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Operand<'a> {
    fn from(a: &'a [f64; N]) -> Self {
        Operand::Array(a.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_nulls_prefers_count() {
        let m = Bitmask::new_set_all(3, true);
        assert!(!has_nulls(None, None));
        assert!(!has_nulls(Some(0), Some(&m)));
        assert!(has_nulls(Some(1), Some(&m)));
        // unknown count with a mask is treated as nullable
        assert!(has_nulls(None, Some(&m)));
    }

    #[test]
    fn resolve_null_mask_paths() {
        let m = Bitmask::new_set_all(4, true);
        assert!(resolve_null_mask("k", 4, None, None).unwrap().is_none());
        assert!(resolve_null_mask("k", 4, Some(&m), Some(0)).unwrap().is_none());
        assert!(resolve_null_mask("k", 4, Some(&m), Some(1)).unwrap().is_some());
        assert!(matches!(
            resolve_null_mask("k", 4, None, Some(2)),
            Err(KernelError::InvalidArguments(_))
        ));
        assert!(matches!(
            resolve_null_mask("k", 5, Some(&m), Some(1)),
            Err(KernelError::InvalidArguments(_))
        ));
    }

    #[test]
    fn operand_broadcast_and_len() {
        let s: Operand = 2.5_f64.into();
        assert_eq!(s.at(0), 2.5);
        assert_eq!(s.at(99), 2.5);
        assert_eq!(s.as_scalar(), Some(2.5));
        assert!(s.confirm_len("k", 7).is_ok());

        let vals = [1.0, 2.0, 3.0];
        let a: Operand = (&vals).into();
        assert_eq!(a.at(2), 3.0);
        assert_eq!(a.as_scalar(), None);
        assert!(a.confirm_len("k", 3).is_ok());
        assert!(matches!(
            a.confirm_len("k", 4),
            Err(KernelError::LengthMismatch(_))
        ));
    }

    #[test]
    fn output_null_mask_truncates_to_len() {
        let mut m = Bitmask::new_set_all(8, true);
        m.set(1, false);
        m.set(6, false);
        let out = output_null_mask(&m, 3);
        assert_eq!(out.len(), 3);
        assert!(out.get(0) && !out.get(1) && out.get(2));

        let same = output_null_mask(&m, 8);
        assert_eq!(same.len(), 8);
        assert!(!same.get(6));
    }

    #[test]
    fn empty_slice_is_aligned() {
        let empty: [f64; 0] = [];
        assert!(is_simd_aligned(&empty));
    }
}
