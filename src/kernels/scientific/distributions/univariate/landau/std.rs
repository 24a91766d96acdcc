// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Landau Distribution Scalar Implementation**
//!
//! Sequential kernels over the scalar evaluator. Also hosts the element-wise
//! (broadcast) parameter kernels, which are always sequential.

use log::debug;
use minarrow::Bitmask;

use super::{ComponentOperands, LandauMixture, MixtureOperands};
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::scalar::{
    landau_fit_scalar, landau_pdf_scalar, landau_scalar,
};
use crate::kernels::scientific::distributions::univariate::common::std::{
    dense_indexed_kernel_f64_std_to, dense_univariate_kernel_f64_std_to,
    masked_indexed_kernel_f64_std_to, masked_univariate_kernel_f64_std_to,
};
use crate::utils::{Operand, confirm_equal_len, resolve_null_mask};

/// Shared driver: output length check, empty short-circuit, dense or null-aware path.
#[inline(always)]
pub(super) fn univariate_std_to<F>(
    fname: &str,
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: F,
) -> Result<(), KernelError>
where
    F: Fn(f64) -> f64,
{
    confirm_equal_len(fname, x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    match resolve_null_mask(fname, x.len(), null_mask, null_count)? {
        None => dense_univariate_kernel_f64_std_to(x, output, scalar_body),
        Some(mask) => masked_univariate_kernel_f64_std_to(x, mask, output, scalar_body),
    }
    Ok(())
}

/// Indexed counterpart of [`univariate_std_to`] for per-element parameters.
#[inline(always)]
fn indexed_std_to<F>(
    fname: &str,
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: F,
) -> Result<(), KernelError>
where
    F: Fn(usize, f64) -> f64,
{
    confirm_equal_len(fname, x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    match resolve_null_mask(fname, x.len(), null_mask, null_count)? {
        None => dense_indexed_kernel_f64_std_to(x, output, scalar_body),
        Some(mask) => masked_indexed_kernel_f64_std_to(x, mask, output, scalar_body),
    }
    Ok(())
}

/// Landau PDF (scalar loop), null-aware. f(x; ξ, x₀) = φ((x − x₀)/ξ) / ξ
#[cfg_attr(feature = "simd", allow(dead_code))]
#[inline(always)]
pub fn landau_pdf_std_to(
    x: &[f64],
    xi: f64,
    x0: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    if xi <= 0.0 {
        debug!("landau_pdf: xi = {} <= 0, density is zero", xi);
    }
    univariate_std_to("landau_pdf", x, output, null_mask, null_count, move |xv| {
        landau_pdf_scalar(xv, xi, x0)
    })
}

/// Location-scale Landau PDF (scalar loop), null-aware.
#[cfg_attr(feature = "simd", allow(dead_code))]
#[inline(always)]
pub fn landau_std_to(
    x: &[f64],
    mpv: f64,
    sigma: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    if sigma <= 0.0 {
        debug!("landau: sigma = {} <= 0, density is zero", sigma);
    }
    univariate_std_to("landau", x, output, null_mask, null_count, move |xv| {
        landau_scalar(xv, mpv, sigma)
    })
}

/// Two-component Landau mixture (scalar loop), null-aware.
#[cfg_attr(feature = "simd", allow(dead_code))]
#[inline(always)]
pub fn landau_fit_std_to(
    x: &[f64],
    mixture: &LandauMixture,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    let m = *mixture;
    univariate_std_to("landau_fit", x, output, null_mask, null_count, move |xv| {
        m.evaluate(xv)
    })
}

/// Landau PDF with per-element `xi` and `x0`.
#[inline(always)]
pub fn landau_pdf_broadcast_std_to(
    x: &[f64],
    xi: Operand<'_>,
    x0: Operand<'_>,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    xi.confirm_len("landau_pdf_broadcast: xi", x.len())?;
    x0.confirm_len("landau_pdf_broadcast: x0", x.len())?;
    indexed_std_to(
        "landau_pdf_broadcast",
        x,
        output,
        null_mask,
        null_count,
        move |i, xv| landau_pdf_scalar(xv, xi.at(i), x0.at(i)),
    )
}

/// Location-scale Landau PDF with per-element `mpv` and `sigma`.
#[inline(always)]
pub fn landau_broadcast_std_to(
    x: &[f64],
    mpv: Operand<'_>,
    sigma: Operand<'_>,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    mpv.confirm_len("landau_broadcast: mpv", x.len())?;
    sigma.confirm_len("landau_broadcast: sigma", x.len())?;
    indexed_std_to(
        "landau_broadcast",
        x,
        output,
        null_mask,
        null_count,
        move |i, xv| landau_scalar(xv, mpv.at(i), sigma.at(i)),
    )
}

/// Two-component Landau mixture with per-element component parameters.
#[inline(always)]
pub fn landau_fit_broadcast_std_to(
    x: &[f64],
    operands: &MixtureOperands<'_>,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    let ComponentOperands {
        scale: s0,
        mpv: m0,
        sigma: g0,
    } = operands.first;
    let ComponentOperands {
        scale: s1,
        mpv: m1,
        sigma: g1,
    } = operands.second;
    operands.confirm_len("landau_fit_broadcast", x.len())?;
    indexed_std_to(
        "landau_fit_broadcast",
        x,
        output,
        null_mask,
        null_count,
        move |i, xv| {
            landau_fit_scalar(
                xv,
                s0.at(i),
                m0.at(i),
                g0.at(i),
                s1.at(i),
                m1.at(i),
                g1.at(i),
            )
        },
    )
}
