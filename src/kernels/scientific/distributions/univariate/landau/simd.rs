// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Landau Distribution SIMD Implementation**
//!
//! Vectorised Landau kernels. The regime chain is evaluated branch-free across
//! `W64` lanes and blended by threshold masks (see `landau_density_simd`), so results
//! match the scalar kernels exactly. Unaligned input runs the scalar body throughout.

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

use std::simd::Simd;

use log::{debug, trace};
use minarrow::Bitmask;

use super::LandauMixture;
use super::std::univariate_std_to;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::scalar::{
    landau_density_simd, landau_pdf_scalar, landau_scalar,
};
use crate::kernels::scientific::distributions::univariate::common::simd::{
    dense_univariate_kernel_f64_simd_to, masked_univariate_kernel_f64_simd_to,
};
use crate::utils::{confirm_equal_len, is_simd_aligned, resolve_null_mask};

const N: usize = W64;

/// Shared driver: output length check, empty short-circuit, dense or null-aware path.
#[inline(always)]
fn univariate_simd_to<FSimd, FScalar>(
    fname: &str,
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    simd_body: FSimd,
    scalar_body: FScalar,
) -> Result<(), KernelError>
where
    FSimd: Fn(Simd<f64, N>) -> Simd<f64, N>,
    FScalar: Fn(f64) -> f64,
{
    confirm_equal_len(fname, x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    if !is_simd_aligned(x) {
        trace!("{}: input is not 64-byte aligned, using scalar path", fname);
    }
    match resolve_null_mask(fname, x.len(), null_mask, null_count)? {
        None => dense_univariate_kernel_f64_simd_to::<N, _, _>(x, output, simd_body, scalar_body),
        Some(mask) => masked_univariate_kernel_f64_simd_to::<N, _, _>(
            x,
            mask,
            output,
            simd_body,
            scalar_body,
        ),
    }
    Ok(())
}

/// SIMD-accelerated Landau PDF (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
/// f(x; ξ, x₀) = φ((x − x₀)/ξ) / ξ, zero for ξ ≤ 0.
#[inline(always)]
pub fn landau_pdf_simd_to(
    x: &[f64],
    xi: f64,
    x0: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    if xi <= 0.0 {
        debug!("landau_pdf: xi = {} <= 0, density is zero", xi);
        return univariate_std_to("landau_pdf", x, output, null_mask, null_count, |_| 0.0);
    }

    let xi_v = Simd::<f64, N>::splat(xi);
    let x0_v = Simd::<f64, N>::splat(x0);

    let simd_body = move |x_v: Simd<f64, N>| landau_density_simd((x_v - x0_v) / xi_v) / xi_v;
    let scalar_body = move |xv: f64| landau_pdf_scalar(xv, xi, x0);

    univariate_simd_to("landau_pdf", x, output, null_mask, null_count, simd_body, scalar_body)
}

/// SIMD-accelerated location-scale Landau PDF (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
/// f(x; mpv, σ) = φ((x − mpv)/σ), zero for σ ≤ 0.
#[inline(always)]
pub fn landau_simd_to(
    x: &[f64],
    mpv: f64,
    sigma: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    if sigma <= 0.0 {
        debug!("landau: sigma = {} <= 0, density is zero", sigma);
        return univariate_std_to("landau", x, output, null_mask, null_count, |_| 0.0);
    }

    let mpv_v = Simd::<f64, N>::splat(mpv);
    let sigma_v = Simd::<f64, N>::splat(sigma);

    let simd_body = move |x_v: Simd<f64, N>| landau_density_simd((x_v - mpv_v) / sigma_v);
    let scalar_body = move |xv: f64| landau_scalar(xv, mpv, sigma);

    univariate_simd_to("landau", x, output, null_mask, null_count, simd_body, scalar_body)
}

/// SIMD-accelerated two-component Landau mixture (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
/// f(x) = s₀·φ((x − mpv₀)/σ₀) + s₁·φ((x − mpv₁)/σ₁), a component with σ ≤ 0 contributes s·0.
#[inline(always)]
pub fn landau_fit_simd_to(
    x: &[f64],
    mixture: &LandauMixture,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    let m = *mixture;
    let (c0, c1) = (m.first, m.second);
    // same test as `landau_scalar`, so a NaN width still propagates
    let dead0 = c0.sigma <= 0.0;
    let dead1 = c1.sigma <= 0.0;

    let zero = Simd::<f64, N>::splat(0.0);
    let s0 = Simd::<f64, N>::splat(c0.scale);
    let m0 = Simd::<f64, N>::splat(c0.mpv);
    let g0 = Simd::<f64, N>::splat(c0.sigma);
    let s1 = Simd::<f64, N>::splat(c1.scale);
    let m1 = Simd::<f64, N>::splat(c1.mpv);
    let g1 = Simd::<f64, N>::splat(c1.sigma);

    let simd_body = move |x_v: Simd<f64, N>| {
        let f0 = if dead0 {
            zero
        } else {
            landau_density_simd((x_v - m0) / g0)
        };
        let f1 = if dead1 {
            zero
        } else {
            landau_density_simd((x_v - m1) / g1)
        };
        s0 * f0 + s1 * f1
    };
    let scalar_body = move |xv: f64| m.evaluate(xv);

    univariate_simd_to("landau_fit", x, output, null_mask, null_count, simd_body, scalar_body)
}
