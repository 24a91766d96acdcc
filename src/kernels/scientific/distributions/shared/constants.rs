// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Landau Approximation Constants** - *Coefficient Tables and Regime Boundaries*
//!
//! Fixed double-precision tables for the CERNLIB `DENLAN` rational approximation of the
//! Landau density (Kölbig & Schorr). Every value is load-bearing: the approximation is only
//! as continuous across regime boundaries as these digits make it.
//!
//! Polynomials are stored lowest degree first and evaluated by Horner's scheme:
//! `c0 + (c1 + (c2 + (c3 + c4*t)*t)*t)*t`.

// ******** Normalisation ***********************************************/

/// 1/√(2π) as carried by the approximation, to ten significant digits.
///
/// Deliberately not `FRAC_1_SQRT_2PI` to full precision: the left-tail expansion
/// was fitted with this rounding.
pub(crate) const LANDAU_INV_SQRT_2PI: f64 = 0.3989422803;

// ******** Regime boundaries *******************************************/

/// Below this the left-tail asymptotic expansion is used.
pub(crate) const LEFT_TAIL_END: f64 = -5.5;
/// Upper edge of rational regime 1 (`P1/Q1` with the `exp(-u)·√u` factor).
pub(crate) const R1_END: f64 = -1.0;
/// Upper edge of rational regime 2 (`P2/Q2` in `v`).
pub(crate) const R2_END: f64 = 1.0;
/// Upper edge of rational regime 3 (`P3/Q3` in `v`).
pub(crate) const R3_END: f64 = 5.0;
/// Upper edge of rational regime 4 (`P4/Q4` in `1/v`).
pub(crate) const R4_END: f64 = 12.0;
/// Upper edge of rational regime 5 (`P5/Q5` in `1/v`).
pub(crate) const R5_END: f64 = 50.0;
/// Upper edge of rational regime 6 (`P6/Q6` in `1/v`); above it the right-tail form applies.
pub(crate) const R6_END: f64 = 300.0;

/// Left-tail underflow guard on `u = exp(v + 1)`.
///
/// Below it `exp(-1/u)` is zero in double precision and `1/u` is huge, so the
/// density is returned as an exact zero without evaluating the expansion.
pub(crate) const LEFT_TAIL_UNDERFLOW: f64 = 1e-10;

// ******** Rational approximation tables *******************************/

pub(crate) const P1: [f64; 5] = [
    0.4259894875,
    -0.1249762550,
    0.03984243700,
    -0.006298287635,
    0.001511162253,
];
pub(crate) const Q1: [f64; 5] = [
    1.0,
    -0.3388260629,
    0.09594393323,
    -0.01608042283,
    0.003778942063,
];

pub(crate) const P2: [f64; 5] = [
    0.1788541609,
    0.1173957403,
    0.01488850518,
    -0.001394989411,
    0.0001283617211,
];
pub(crate) const Q2: [f64; 5] = [
    1.0,
    0.7428795082,
    0.3153932961,
    0.06694219548,
    0.008790609714,
];

pub(crate) const P3: [f64; 5] = [
    0.1788544503,
    0.09359161662,
    0.006325387654,
    0.00006611667319,
    -0.000002031049101,
];
pub(crate) const Q3: [f64; 5] = [
    1.0,
    0.6097809921,
    0.2560616665,
    0.04746722384,
    0.006957301675,
];

pub(crate) const P4: [f64; 5] = [
    0.9874054407,
    118.6723273,
    849.2794360,
    -743.7792444,
    427.0262186,
];
pub(crate) const Q4: [f64; 5] = [
    1.0,
    106.8615961,
    337.6496214,
    2016.712389,
    1597.063511,
];

pub(crate) const P5: [f64; 5] = [
    1.003675074,
    167.5702434,
    4789.711289,
    21217.86767,
    -22324.94910,
];
pub(crate) const Q5: [f64; 5] = [
    1.0,
    156.9424537,
    3745.310488,
    9834.698876,
    66924.28357,
];

pub(crate) const P6: [f64; 5] = [
    1.000827619,
    664.9143136,
    62972.92665,
    475554.6998,
    -5743609.109,
];
pub(crate) const Q6: [f64; 5] = [
    1.0,
    651.4101098,
    56974.73333,
    165917.4725,
    -2815759.939,
];

// ******** Asymptotic expansions ***************************************/

/// Left-tail series coefficients in `u = exp(v + 1)`.
pub(crate) const A1: [f64; 3] = [0.04166666667, -0.01996527778, 0.02709538966];

/// Right-tail series coefficients in `u = 1/(v - v·ln v/(v + 1))`.
pub(crate) const A2: [f64; 2] = [-1.845568670, -4.284640743];
