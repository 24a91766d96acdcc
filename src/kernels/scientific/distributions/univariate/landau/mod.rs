// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Landau Distribution Module** - *Energy-Loss Fluctuations in Thin Absorbers*
//!
//! Array kernels for the Landau density, evaluated with the CERNLIB `DENLAN` piecewise
//! rational approximation (see `shared::scalar` for the regimes).
//!
//! ## Overview
//! The Landau distribution describes the energy lost by a charged particle crossing a thin
//! layer of matter. It has a sharp peak and a heavy right tail (`f(v) ~ 1/v²`); mean and
//! variance do not exist, so the distribution is located by its most probable value.
//!
//! ## Forms
//! - **Standardized**: `landau_pdf(x, ξ, x₀)` = φ((x − x₀)/ξ) / ξ
//! - **Location-scale**: `landau(x, mpv, σ)` = φ((x − mpv)/σ), rescaled once and
//!   evaluated at unit scale (no second division by σ)
//! - **Mixture**: `landau_fit(x, m)` = s₀·landau(x, mpv₀, σ₀) + s₁·landau(x, mpv₁, σ₁)
//!
//! ## Degenerate parameters
//! A scale `<= 0` never errors: the density is `0` for those elements, so one bad
//! parameter set cannot abort a bulk evaluation. `KernelError` is reserved for caller
//! mistakes (mismatched lengths, inconsistent null metadata).
//!
//! ## Use Cases
//! - Fitting energy-deposit spectra in silicon and gas detectors
//! - Two overlapping peaks (e.g. one- and two-particle deposits) with `landau_fit`,
//!   passed as the model function to an external least-squares fitter
//!
//! ## Example
//! ```rust,ignore
//! use landau_kernels::kernels::scientific::distributions::univariate::landau::*;
//! use minarrow::vec64;
//!
//! let x = vec64![-2.0, 0.0, 2.0, 10.0];
//! let pdf = landau_pdf(&x, 1.0, 0.0, None, None).unwrap();
//!
//! let model = LandauMixture::from_params(&[100.0, 1.0, 0.5, 40.0, 6.0, 2.0]);
//! let y = landau_fit(&x, &model, None, None).unwrap();
//! ```

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "simd")]
mod simd;
mod std;

use minarrow::{Bitmask, FloatArray, Vec64};

use crate::errors::KernelError;
use crate::utils::{Operand, output_null_mask};

pub use crate::kernels::scientific::distributions::shared::scalar::{
    LandauRegime, landau_density, landau_fit_scalar, landau_pdf_scalar, landau_regime,
    landau_scalar,
};

/// One weighted, location-scale Landau peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandauComponent {
    /// Weight multiplying the density (peak amplitude in a histogram fit).
    pub scale: f64,
    /// Most probable value (location).
    pub mpv: f64,
    /// Width; `<= 0` makes the component vanish.
    pub sigma: f64,
}

impl LandauComponent {
    pub const fn new(scale: f64, mpv: f64, sigma: f64) -> Self {
        Self { scale, mpv, sigma }
    }

    /// `scale · landau(x, mpv, sigma)`
    #[inline(always)]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.scale * landau_scalar(x, self.mpv, self.sigma)
    }
}

/// Two independent Landau peaks summed.
///
/// Components are not ordered or constrained; which one tracks which peak is up to
/// the fitter that drives the parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandauMixture {
    pub first: LandauComponent,
    pub second: LandauComponent,
}

impl LandauMixture {
    pub const fn new(first: LandauComponent, second: LandauComponent) -> Self {
        Self { first, second }
    }

    /// From a flat fitter vector `[scale0, mpv0, sigma0, scale1, mpv1, sigma1]`.
    pub const fn from_params(p: &[f64; 6]) -> Self {
        Self {
            first: LandauComponent::new(p[0], p[1], p[2]),
            second: LandauComponent::new(p[3], p[4], p[5]),
        }
    }

    /// Inverse of [`LandauMixture::from_params`].
    pub const fn to_params(&self) -> [f64; 6] {
        [
            self.first.scale,
            self.first.mpv,
            self.first.sigma,
            self.second.scale,
            self.second.mpv,
            self.second.sigma,
        ]
    }

    /// Mixture density at a single point.
    #[inline(always)]
    pub fn evaluate(&self, x: f64) -> f64 {
        landau_fit_scalar(
            x,
            self.first.scale,
            self.first.mpv,
            self.first.sigma,
            self.second.scale,
            self.second.mpv,
            self.second.sigma,
        )
    }
}

impl TryFrom<&[f64]> for LandauMixture {
    type Error = KernelError;

    /// Accepts a fitter parameter slice; it must hold exactly six values.
    fn try_from(p: &[f64]) -> Result<Self, Self::Error> {
        let arr: &[f64; 6] = p.try_into().map_err(|_| {
            KernelError::LengthMismatch(crate::errors::log_length_mismatch(
                "LandauMixture::try_from",
                6,
                p.len(),
            ))
        })?;
        Ok(Self::from_params(arr))
    }
}

/// Per-element parameters of one mixture component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentOperands<'a> {
    pub scale: Operand<'a>,
    pub mpv: Operand<'a>,
    pub sigma: Operand<'a>,
}

/// Per-element parameters of both mixture components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureOperands<'a> {
    pub first: ComponentOperands<'a>,
    pub second: ComponentOperands<'a>,
}

impl<'a> ComponentOperands<'a> {
    pub fn confirm_len(&self, label: &str, len: usize) -> Result<(), KernelError> {
        self.scale.confirm_len(label, len)?;
        self.mpv.confirm_len(label, len)?;
        self.sigma.confirm_len(label, len)
    }
}

impl<'a> MixtureOperands<'a> {
    pub fn confirm_len(&self, label: &str, len: usize) -> Result<(), KernelError> {
        self.first.confirm_len(label, len)?;
        self.second.confirm_len(label, len)
    }
}

impl From<LandauComponent> for ComponentOperands<'_> {
    fn from(c: LandauComponent) -> Self {
        Self {
            scale: Operand::Scalar(c.scale),
            mpv: Operand::Scalar(c.mpv),
            sigma: Operand::Scalar(c.sigma),
        }
    }
}

impl From<&LandauMixture> for MixtureOperands<'_> {
    fn from(m: &LandauMixture) -> Self {
        Self {
            first: m.first.into(),
            second: m.second.into(),
        }
    }
}

/// Allocates the output buffer, lets `write` fill it and attaches the input mask,
/// trimmed to `len`.
#[inline(always)]
fn collect_float_array<F>(
    len: usize,
    null_mask: Option<&Bitmask>,
    write: F,
) -> Result<FloatArray<f64>, KernelError>
where
    F: FnOnce(&mut [f64]) -> Result<(), KernelError>,
{
    if len == 0 {
        return Ok(FloatArray::from_slice(&[]));
    }
    let mut out = Vec64::with_capacity(len);
    out.resize(len, 0.0);
    write(out.as_mut_slice())?;
    Ok(FloatArray::from_vec64(
        out,
        null_mask.map(|m| output_null_mask(m, len)),
    ))
}

/// Computes the standardized Landau probability density function.
///
/// Calculates f(x; ξ, x₀) = φ((x − x₀)/ξ) / ξ for each element, where φ is the
/// unit Landau density.
///
/// ## Parameters
/// - `x`: Array of values to evaluate
/// - `xi`: Scale ξ; `<= 0` yields a zero density
/// - `x0`: Location x₀
/// - `null_mask`: Optional validity mask (Arrow-style: 1=valid, 0=null)
/// - `null_count`: Optional count of null values for optimisation
///
/// ## Returns
/// `FloatArray<f64>` containing PDF values, with nulls propagated from input mask.
///
/// ## Errors
/// `KernelError::InvalidArguments` if `null_count > 0` without a mask, or the mask is
/// shorter than `x`.
///
/// ## Example
/// ```rust,ignore
/// let x = vec64![-2.0, 0.0, 2.0];
/// let result = landau_pdf(&x, 1.0, 0.0, None, None).unwrap();
/// // result.data[1] == 0.1788541609
/// ```
#[inline(always)]
pub fn landau_pdf(
    x: &[f64],
    xi: f64,
    x0: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x.len(), null_mask, |out| {
        landau_pdf_to(x, xi, x0, out, null_mask, null_count)
    })
}

/// Computes the location-scale Landau density around a most probable value.
///
/// Calculates f(x; mpv, σ) = φ((x − mpv)/σ) for each element. The variable is rescaled
/// once and evaluated at unit scale, so there is no Jacobian division by σ.
///
/// ## Parameters
/// - `x`: Array of values to evaluate
/// - `mpv`: Most probable value (location)
/// - `sigma`: Width; `<= 0` yields a zero density
/// - `null_mask`: Optional validity mask (Arrow-style: 1=valid, 0=null)
/// - `null_count`: Optional count of null values for optimisation
#[inline(always)]
pub fn landau(
    x: &[f64],
    mpv: f64,
    sigma: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x.len(), null_mask, |out| {
        landau_to(x, mpv, sigma, out, null_mask, null_count)
    })
}

/// Evaluates a two-component Landau mixture, the model function for double-peak fits.
///
/// f(x) = s₀·landau(x, mpv₀, σ₀) + s₁·landau(x, mpv₁, σ₁)
#[inline(always)]
pub fn landau_fit(
    x: &[f64],
    mixture: &LandauMixture,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x.len(), null_mask, |out| {
        landau_fit_to(x, mixture, out, null_mask, null_count)
    })
}

// Zero-allocation variants

/// Landau PDF (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer, which must have `x.len()` elements.
#[inline(always)]
pub fn landau_pdf_to(
    x: &[f64],
    xi: f64,
    x0: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    #[cfg(feature = "simd")]
    {
        simd::landau_pdf_simd_to(x, xi, x0, output, null_mask, null_count)
    }

    #[cfg(not(feature = "simd"))]
    {
        std::landau_pdf_std_to(x, xi, x0, output, null_mask, null_count)
    }
}

/// Location-scale Landau PDF (zero-allocation variant).
#[inline(always)]
pub fn landau_to(
    x: &[f64],
    mpv: f64,
    sigma: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    #[cfg(feature = "simd")]
    {
        simd::landau_simd_to(x, mpv, sigma, output, null_mask, null_count)
    }

    #[cfg(not(feature = "simd"))]
    {
        std::landau_std_to(x, mpv, sigma, output, null_mask, null_count)
    }
}

/// Two-component Landau mixture (zero-allocation variant).
#[inline(always)]
pub fn landau_fit_to(
    x: &[f64],
    mixture: &LandauMixture,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    #[cfg(feature = "simd")]
    {
        simd::landau_fit_simd_to(x, mixture, output, null_mask, null_count)
    }

    #[cfg(not(feature = "simd"))]
    {
        std::landau_fit_std_to(x, mixture, output, null_mask, null_count)
    }
}

// Element-wise parameter variants

/// Landau PDF with scalar or per-element `xi` and `x0`.
///
/// ## Errors
/// `KernelError::LengthMismatch` if an array operand's length differs from `x`.
#[inline(always)]
pub fn landau_pdf_broadcast(
    x: &[f64],
    xi: Operand<'_>,
    x0: Operand<'_>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x.len(), null_mask, |out| {
        landau_pdf_broadcast_to(x, xi, x0, out, null_mask, null_count)
    })
}

/// Landau PDF with per-element parameters (zero-allocation variant).
#[inline(always)]
pub fn landau_pdf_broadcast_to(
    x: &[f64],
    xi: Operand<'_>,
    x0: Operand<'_>,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::landau_pdf_broadcast_std_to(x, xi, x0, output, null_mask, null_count)
}

/// Location-scale Landau PDF with scalar or per-element `mpv` and `sigma`.
///
/// ## Errors
/// `KernelError::LengthMismatch` if an array operand's length differs from `x`.
#[inline(always)]
pub fn landau_broadcast(
    x: &[f64],
    mpv: Operand<'_>,
    sigma: Operand<'_>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x.len(), null_mask, |out| {
        landau_broadcast_to(x, mpv, sigma, out, null_mask, null_count)
    })
}

/// Location-scale Landau PDF with per-element parameters (zero-allocation variant).
#[inline(always)]
pub fn landau_broadcast_to(
    x: &[f64],
    mpv: Operand<'_>,
    sigma: Operand<'_>,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::landau_broadcast_std_to(x, mpv, sigma, output, null_mask, null_count)
}

/// Two-component mixture with scalar or per-element component parameters.
///
/// ## Errors
/// `KernelError::LengthMismatch` if an array operand's length differs from `x`.
#[inline(always)]
pub fn landau_fit_broadcast(
    x: &[f64],
    operands: &MixtureOperands<'_>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x.len(), null_mask, |out| {
        landau_fit_broadcast_to(x, operands, out, null_mask, null_count)
    })
}

/// Two-component mixture with per-element parameters (zero-allocation variant).
#[inline(always)]
pub fn landau_fit_broadcast_to(
    x: &[f64],
    operands: &MixtureOperands<'_>,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::landau_fit_broadcast_std_to(x, operands, output, null_mask, null_count)
}

// Parallel variants

/// Landau PDF on the rayon pool.
#[cfg(feature = "parallel")]
pub fn landau_pdf_par(
    x: &[f64],
    xi: f64,
    x0: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x.len(), null_mask, |out| {
        parallel::landau_pdf_par_to(x, xi, x0, out, null_mask, null_count)
    })
}

/// Location-scale Landau PDF on the rayon pool.
#[cfg(feature = "parallel")]
pub fn landau_par(
    x: &[f64],
    mpv: f64,
    sigma: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x.len(), null_mask, |out| {
        parallel::landau_par_to(x, mpv, sigma, out, null_mask, null_count)
    })
}

/// Two-component Landau mixture on the rayon pool.
#[cfg(feature = "parallel")]
pub fn landau_fit_par(
    x: &[f64],
    mixture: &LandauMixture,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x.len(), null_mask, |out| {
        parallel::landau_fit_par_to(x, mixture, out, null_mask, null_count)
    })
}

#[cfg(feature = "parallel")]
pub use parallel::{landau_fit_par_to, landau_par_to, landau_pdf_par_to};
