// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

// The `simd` feature builds on std::simd, which is still nightly-only.
// compile with RUSTFLAGS="-C target-cpu=native" cargo +nightly build --features simd
#![cfg_attr(feature = "simd", feature(portable_simd))]

//! # **Landau Kernels** - *Landau Distribution Array Kernels*
//!
//! Element-wise evaluation of the Landau probability density over `f64` arrays,
//! with Arrow-style null handling, optional SIMD lanes and an optional rayon path.
//!
//! The entry points live in
//! [`kernels::scientific::distributions::univariate::landau`]:
//! - `landau_pdf(x, xi, x0)` - standardized density
//! - `landau(x, mpv, sigma)` - location-scale density
//! - `landau_fit(x, mixture)` - two-component mixture used as a fit model

pub mod kernels {
    pub mod scientific {
        pub mod distributions;
    }
}

pub mod config;

pub mod errors;

pub mod utils;
