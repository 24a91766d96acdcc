// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Landau Distribution Parallel Implementation**
//!
//! Rayon-backed kernels for large inputs, e.g. evaluating a fit model over a fine grid.
//! Each chunk runs the scalar evaluator, so output matches the sequential kernels.

use log::debug;
use minarrow::Bitmask;

use super::LandauMixture;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::scalar::{landau_pdf_scalar, landau_scalar};
use crate::kernels::scientific::distributions::univariate::common::parallel::{
    dense_univariate_kernel_f64_par_to, masked_univariate_kernel_f64_par_to,
};
use crate::utils::{confirm_equal_len, resolve_null_mask};

#[inline(always)]
fn univariate_par_to<F>(
    fname: &str,
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: F,
) -> Result<(), KernelError>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    confirm_equal_len(fname, x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    match resolve_null_mask(fname, x.len(), null_mask, null_count)? {
        None => dense_univariate_kernel_f64_par_to(x, output, scalar_body),
        Some(mask) => masked_univariate_kernel_f64_par_to(x, mask, output, scalar_body),
    }
    Ok(())
}

/// Parallel Landau PDF (zero-allocation variant).
pub fn landau_pdf_par_to(
    x: &[f64],
    xi: f64,
    x0: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    if xi <= 0.0 {
        debug!("landau_pdf_par: xi = {} <= 0, density is zero", xi);
    }
    univariate_par_to("landau_pdf_par", x, output, null_mask, null_count, move |xv| {
        landau_pdf_scalar(xv, xi, x0)
    })
}

/// Parallel location-scale Landau PDF (zero-allocation variant).
pub fn landau_par_to(
    x: &[f64],
    mpv: f64,
    sigma: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    if sigma <= 0.0 {
        debug!("landau_par: sigma = {} <= 0, density is zero", sigma);
    }
    univariate_par_to("landau_par", x, output, null_mask, null_count, move |xv| {
        landau_scalar(xv, mpv, sigma)
    })
}

/// Parallel two-component Landau mixture (zero-allocation variant).
pub fn landau_fit_par_to(
    x: &[f64],
    mixture: &LandauMixture,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    let m = *mixture;
    univariate_par_to("landau_fit_par", x, output, null_mask, null_count, move |xv| {
        m.evaluate(xv)
    })
}
