// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Parallel Distribution Utilities**
//!
//! Rayon drivers that split the output into `PARALLEL_CHUNK_SIZE` blocks and run the
//! scalar body over each block on the global pool. Elements are independent, so the
//! result is identical to the sequential drivers.

use log::trace;
use minarrow::Bitmask;
use rayon::prelude::*;

use crate::config::{PARALLEL_CHUNK_SIZE, PARALLEL_MIN_LEN};
use crate::kernels::scientific::distributions::univariate::common::std::{
    dense_univariate_kernel_f64_std_to, masked_univariate_kernel_f64_std_to,
};

/// Dense f64->f64 kernel on the rayon pool (zero-allocation variant).
///
/// Inputs shorter than `PARALLEL_MIN_LEN` run on the calling thread.
///
/// ## Panics
/// Panics if `x.len() != out.len()`.
#[inline]
pub fn dense_univariate_kernel_f64_par_to<FScalar>(x: &[f64], out: &mut [f64], scalar_body: FScalar)
where
    FScalar: Fn(f64) -> f64 + Sync + Send,
{
    assert_eq!(
        x.len(),
        out.len(),
        "dense_univariate_kernel_f64_par_to: input/output length mismatch"
    );
    if x.len() < PARALLEL_MIN_LEN {
        trace!("parallel kernel: {} elements, running sequentially", x.len());
        dense_univariate_kernel_f64_std_to(x, out, scalar_body);
        return;
    }

    out.par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(x.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|(o, xs)| {
            for (oi, &xi) in o.iter_mut().zip(xs) {
                *oi = scalar_body(xi);
            }
        });
}

/// Null-aware f64->f64 kernel on the rayon pool (zero-allocation variant).
///
/// Null lanes are written as `NaN`. `mask` must cover `x.len()` bits.
///
/// ## Panics
/// Panics if `x.len() != out.len()`.
#[inline]
pub fn masked_univariate_kernel_f64_par_to<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    out: &mut [f64],
    scalar_body: FScalar,
) where
    FScalar: Fn(f64) -> f64 + Sync + Send,
{
    assert_eq!(
        x.len(),
        out.len(),
        "masked_univariate_kernel_f64_par_to: input/output length mismatch"
    );
    if x.len() < PARALLEL_MIN_LEN {
        trace!("parallel kernel: {} elements, running sequentially", x.len());
        masked_univariate_kernel_f64_std_to(x, mask, out, scalar_body);
        return;
    }

    out.par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(x.par_chunks(PARALLEL_CHUNK_SIZE))
        .enumerate()
        .for_each(|(chunk, (o, xs))| {
            let base = chunk * PARALLEL_CHUNK_SIZE;
            for (j, (oi, &xi)) in o.iter_mut().zip(xs).enumerate() {
                *oi = if mask.get(base + j) {
                    scalar_body(xi)
                } else {
                    f64::NAN
                };
            }
        });
}
