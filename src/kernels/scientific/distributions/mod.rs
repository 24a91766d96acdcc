// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Landau Distribution Module** - *Energy-Loss Density Kernels*
//!
//! Density kernels for the Landau distribution, the model for ionisation energy loss of
//! charged particles in thin absorbers, together with the two-peak mixture used as a
//! fit model for detector spectra.
//!
//! ## Kernels
//! - **`landau_pdf`**: standardized density with scale ξ and location x₀
//! - **`landau`**: location-scale density around a most probable value
//! - **`landau_fit`**: weighted sum of two location-scale densities
//!
//! Each kernel has a zero-allocation `_to` variant, an element-wise parameter
//! (`_broadcast`) variant and, with the `parallel` feature, a rayon `_par` variant.
//!
//! ## Computational Architecture
//! - **Piecewise rational approximation**: eight regimes of the CERNLIB `DENLAN` routine,
//!   exact to the published coefficients
//! - **SIMD vectorisation**: all regimes evaluated per lane and blended by masks, with no
//!   branches in the hot loop
//! - **Parallel chunks**: large inputs split across the rayon pool
//!
//! ## Arrow Integration and Null Handling
//! - **Null-aware processing**: validity bitmasks are honoured and propagated to the output
//! - **Null lanes**: written as `NaN` and flagged invalid in the returned mask
//!
//! ### Null Value Philosophy
//! Rather than assume, we choose to recognise inf and NaN as valid float values
//! (consistent with Apache Arrow semantics). A `NaN` input yields a `NaN` density and is
//! not treated as null unless the mask says so.
//!
//! ## Numerical Precision
//! The approximation carries roughly single-precision relative accuracy against the exact
//! density, and is continuous across regime boundaries to the same order. See `./tests`
//! for reference values and identities.
//!
//! ## Disclaimer
//! This implementation is provided on a best-effort basis and is intended for
//! general scientific and engineering use. We make no guarantees as to correctness,
//! fitness for any particular purpose, or suitability for uses such as in
//! life-critical, safety-critical, or financial applications.
//!
//! By using these functions, you accept all responsibility for outcomes or decisions
//! based upon its results.

/// # **Shared Distribution Utilities** - *Coefficients and Scalar Evaluators*
///
/// ## Modules
/// - **`constants`**: regime thresholds and rational coefficient tables
/// - **`scalar`**: regime selection and the scalar (and SIMD lane) density
pub mod shared {
    pub mod constants;
    pub mod scalar;
}

/// # **Univariate Distributions**
///
/// - **`landau`**: Landau density kernels and the two-component mixture
/// - **`common`**: element-wise drivers shared by the std, SIMD and parallel paths
pub mod univariate {
    // common kernel patterns
    pub mod common;

    // distributions
    pub mod landau;
}
