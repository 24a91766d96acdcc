// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Landau Scalar Core** - *Piecewise Rational Approximation of the Landau Density*
//!
//! The single-value evaluator every array kernel is built on. The real line is split into
//! seven ordered regimes of the reduced variable `v = (x - x0) / xi`:
//!
//! | Regime | Range | Form |
//! |---|---|---|
//! | left tail | `v < -5.5` | asymptotic series in `u = exp(v + 1)` |
//! | 1 | `[-5.5, -1)` | `exp(-u)·√u · P1(v)/Q1(v)`, `u = exp(-v - 1)` |
//! | 2 | `[-1, 1)` | `P2(v)/Q2(v)` |
//! | 3 | `[1, 5)` | `P3(v)/Q3(v)` |
//! | 4 | `[5, 12)` | `u²·P4(u)/Q4(u)`, `u = 1/v` |
//! | 5 | `[12, 50)` | `u²·P5(u)/Q5(u)`, `u = 1/v` |
//! | 6 | `[50, 300)` | `u²·P6(u)/Q6(u)`, `u = 1/v` |
//! | right tail | `v >= 300` | `u²·(1 + A2 series)`, `u = 1/(v - v·ln v/(v + 1))` |
//!
//! None of these functions fail. A scale `<= 0` yields `0.0`, both infinities yield `0.0`
//! and NaN inputs propagate.
//! The SIMD kernel performs the same operations in the same order, so scalar and
//! vector paths agree bit for bit.

#[cfg(feature = "simd")]
use std::simd::{
    LaneCount, Simd, StdFloat, SupportedLaneCount,
    cmp::{SimdPartialEq, SimdPartialOrd},
};

use crate::kernels::scientific::distributions::shared::constants::*;

/// Region of the reduced variable handled by one branch of the approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandauRegime {
    /// `v < -5.5`
    LeftTail,
    /// `-5.5 <= v < -1`
    Rational1,
    /// `-1 <= v < 1`
    Rational2,
    /// `1 <= v < 5`
    Rational3,
    /// `5 <= v < 12`
    Rational4,
    /// `12 <= v < 50`
    Rational5,
    /// `50 <= v < 300`
    Rational6,
    /// `v >= 300`, and NaN
    RightTail,
}

/// Classifies a reduced variable. First matching threshold wins.
///
/// NaN fails every comparison and therefore lands in [`LandauRegime::RightTail`],
/// whose evaluation propagates it.
#[inline(always)]
pub fn landau_regime(v: f64) -> LandauRegime {
    if v < LEFT_TAIL_END {
        LandauRegime::LeftTail
    } else if v < R1_END {
        LandauRegime::Rational1
    } else if v < R2_END {
        LandauRegime::Rational2
    } else if v < R3_END {
        LandauRegime::Rational3
    } else if v < R4_END {
        LandauRegime::Rational4
    } else if v < R5_END {
        LandauRegime::Rational5
    } else if v < R6_END {
        LandauRegime::Rational6
    } else {
        LandauRegime::RightTail
    }
}

/// Degree-4 polynomial by Horner's scheme, coefficients lowest degree first.
///
/// Plain multiply/add in this exact nesting; no FMA contraction.
#[inline(always)]
pub fn horner5(c: &[f64; 5], t: f64) -> f64 {
    c[0] + (c[1] + (c[2] + (c[3] + c[4] * t) * t) * t) * t
}

/// Standardized Landau density at the reduced variable `v` (unit scale, zero location).
#[inline(always)]
pub fn landau_density(v: f64) -> f64 {
    match landau_regime(v) {
        LandauRegime::LeftTail => {
            let u = (v + 1.0).exp();
            if u < LEFT_TAIL_UNDERFLOW {
                return 0.0;
            }
            let ue = (-1.0 / u).exp();
            let us = u.sqrt();
            LANDAU_INV_SQRT_2PI * (ue / us) * (1.0 + (A1[0] + (A1[1] + A1[2] * u) * u) * u)
        }
        LandauRegime::Rational1 => {
            let u = (-v - 1.0).exp();
            (-u).exp() * u.sqrt() * horner5(&P1, v) / horner5(&Q1, v)
        }
        LandauRegime::Rational2 => horner5(&P2, v) / horner5(&Q2, v),
        LandauRegime::Rational3 => horner5(&P3, v) / horner5(&Q3, v),
        LandauRegime::Rational4 => {
            let u = 1.0 / v;
            u * u * horner5(&P4, u) / horner5(&Q4, u)
        }
        LandauRegime::Rational5 => {
            let u = 1.0 / v;
            u * u * horner5(&P5, u) / horner5(&Q5, u)
        }
        LandauRegime::Rational6 => {
            let u = 1.0 / v;
            u * u * horner5(&P6, u) / horner5(&Q6, u)
        }
        LandauRegime::RightTail => {
            // limit at +inf; the series would give inf/inf
            if v == f64::INFINITY {
                return 0.0;
            }
            let u = 1.0 / (v - v * v.ln() / (v + 1.0));
            u * u * (1.0 + (A2[0] + A2[1] * u) * u)
        }
    }
}

/// Landau density with scale `xi` and location `x0`: `density((x - x0)/xi) / xi`.
///
/// Returns `0.0` when `xi <= 0`.
#[inline(always)]
pub fn landau_pdf_scalar(x: f64, xi: f64, x0: f64) -> f64 {
    if xi <= 0.0 {
        return 0.0;
    }
    let v = (x - x0) / xi;
    landau_density(v) / xi
}

/// Location-scale Landau density around the most probable value `mpv`.
///
/// Rescales once, then evaluates at unit scale; `sigma` is not divided out a second time.
/// Returns `0.0` when `sigma <= 0`.
#[inline(always)]
pub fn landau_scalar(x: f64, mpv: f64, sigma: f64) -> f64 {
    if sigma <= 0.0 {
        return 0.0;
    }
    landau_pdf_scalar((x - mpv) / sigma, 1.0, 0.0)
}

/// Two-component mixture `scale0·landau(x; mpv0, sigma0) + scale1·landau(x; mpv1, sigma1)`.
///
/// Argument order matches the flat parameter vector a least-squares fitter hands over.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn landau_fit_scalar(
    x: f64,
    scale0: f64,
    mpv0: f64,
    sigma0: f64,
    scale1: f64,
    mpv1: f64,
    sigma1: f64,
) -> f64 {
    scale0 * landau_scalar(x, mpv0, sigma0) + scale1 * landau_scalar(x, mpv1, sigma1)
}

/// SIMD counterpart of [`horner5`].
#[cfg(feature = "simd")]
#[inline(always)]
pub fn horner5_simd<const N: usize>(c: &[f64; 5], t: Simd<f64, N>) -> Simd<f64, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    let c0 = Simd::splat(c[0]);
    let c1 = Simd::splat(c[1]);
    let c2 = Simd::splat(c[2]);
    let c3 = Simd::splat(c[3]);
    let c4 = Simd::splat(c[4]);
    c0 + (c1 + (c2 + (c3 + c4 * t) * t) * t) * t
}

/// SIMD counterpart of [`landau_density`].
///
/// Every branch is evaluated across all lanes and blended by regime masks, applied from
/// the rightmost regime down so the lowest matching threshold wins, exactly as in the
/// scalar chain. Non-finite intermediates in lanes of other regimes are discarded.
#[cfg(feature = "simd")]
#[inline(always)]
pub fn landau_density_simd<const N: usize>(v: Simd<f64, N>) -> Simd<f64, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    let one = Simd::<f64, N>::splat(1.0);
    let zero = Simd::<f64, N>::splat(0.0);

    // right tail, also the NaN fall-through
    let u = one / (v - v * v.ln() / (v + one));
    let a2_0 = Simd::splat(A2[0]);
    let a2_1 = Simd::splat(A2[1]);
    let mut out = u * u * (one + (a2_0 + a2_1 * u) * u);
    out = v.simd_eq(Simd::splat(f64::INFINITY)).select(zero, out);

    let u = one / v;
    let r6 = u * u * horner5_simd(&P6, u) / horner5_simd(&Q6, u);
    out = v.simd_lt(Simd::splat(R6_END)).select(r6, out);

    let r5 = u * u * horner5_simd(&P5, u) / horner5_simd(&Q5, u);
    out = v.simd_lt(Simd::splat(R5_END)).select(r5, out);

    let r4 = u * u * horner5_simd(&P4, u) / horner5_simd(&Q4, u);
    out = v.simd_lt(Simd::splat(R4_END)).select(r4, out);

    let r3 = horner5_simd(&P3, v) / horner5_simd(&Q3, v);
    out = v.simd_lt(Simd::splat(R3_END)).select(r3, out);

    let r2 = horner5_simd(&P2, v) / horner5_simd(&Q2, v);
    out = v.simd_lt(Simd::splat(R2_END)).select(r2, out);

    let u = (-v - one).exp();
    let r1 = (-u).exp() * u.sqrt() * horner5_simd(&P1, v) / horner5_simd(&Q1, v);
    out = v.simd_lt(Simd::splat(R1_END)).select(r1, out);

    let u = (v + one).exp();
    let ue = (Simd::splat(-1.0) / u).exp();
    let us = u.sqrt();
    let a1_0 = Simd::splat(A1[0]);
    let a1_1 = Simd::splat(A1[1]);
    let a1_2 = Simd::splat(A1[2]);
    let left = Simd::splat(LANDAU_INV_SQRT_2PI)
        * (ue / us)
        * (one + (a1_0 + (a1_1 + a1_2 * u) * u) * u);
    let left = u.simd_lt(Simd::splat(LEFT_TAIL_UNDERFLOW)).select(zero, left);
    v.simd_lt(Simd::splat(LEFT_TAIL_END)).select(left, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn assert_rel(a: f64, e: f64, tol: f64) {
        let err = if e == 0.0 { a.abs() } else { ((a - e) / e).abs() };
        assert!(err <= tol, "got {a:e}, expected {e:e} (rel err {err:e}, tol {tol:e})");
    }

    /// Largest double strictly below `b`.
    fn prev_float(b: f64) -> f64 {
        if b > 0.0 {
            f64::from_bits(b.to_bits() - 1)
        } else {
            f64::from_bits(b.to_bits() + 1)
        }
    }

    const BOUNDARIES: [f64; 7] = [
        LEFT_TAIL_END,
        R1_END,
        R2_END,
        R3_END,
        R4_END,
        R5_END,
        R6_END,
    ];

    #[test]
    fn regime_classification_is_half_open() {
        use LandauRegime::*;
        let expect = [
            Rational1, Rational2, Rational3, Rational4, Rational5, Rational6, RightTail,
        ];
        let below = [
            LeftTail, Rational1, Rational2, Rational3, Rational4, Rational5, Rational6,
        ];
        for ((&b, &at), &under) in BOUNDARIES.iter().zip(expect.iter()).zip(below.iter()) {
            assert_eq!(landau_regime(b), at, "at {b}");
            assert_eq!(landau_regime(prev_float(b)), under, "just below {b}");
        }
        assert_eq!(landau_regime(f64::NEG_INFINITY), LeftTail);
        assert_eq!(landau_regime(f64::INFINITY), RightTail);
        assert_eq!(landau_regime(f64::NAN), RightTail);
    }

    #[test]
    fn horner_matches_nested_form() {
        let c = [1.0, -2.0, 0.5, 3.0, -0.25];
        let t = 1.75;
        let expect = 1.0 + (-2.0 + (0.5 + (3.0 + -0.25 * t) * t) * t) * t;
        assert_eq!(horner5(&c, t).to_bits(), expect.to_bits());
        assert_eq!(horner5(&c, 0.0), 1.0);
    }

    #[test]
    fn density_at_zero_is_table_ratio() {
        // Horner in v = 0 collapses to P2[0] / Q2[0]
        assert_eq!(landau_density(0.0), P2[0] / Q2[0]);
        assert_rel(landau_density(0.0), 0.1788541609, 1e-15);
    }

    #[test]
    fn density_reference_values() {
        let cases = [
            (-6.0, 1.705107444566063e-64),
            (-5.5, 3.050206023135767e-39),
            (-4.0, 3.3899538569407677e-09),
            (-3.0, 0.0006737286156950518),
            (-2.0, 0.04398547840678685),
            (-1.0, 0.1513919113594072),
            (-0.5, 0.17733354727436876),
            (0.5, 0.165232275368718),
            (1.0, 0.145206637130862),
            (2.0, 0.10491298949080555),
            (5.0, 0.03916341957924748),
            (10.0, 0.011976487387064033),
            (20.0, 0.0030049793941023563),
            (100.0, 0.00010761122391164614),
            (1000.0, 1.0120571850657366e-06),
        ];
        for (v, e) in cases {
            assert_rel(landau_density(v), e, 1e-12);
        }
    }

    #[test]
    fn peak_near_most_probable_value() {
        let mut best = (f64::NEG_INFINITY, 0.0);
        for i in 0..=20_000 {
            let v = -1.0 + i as f64 * 1e-4;
            let d = landau_density(v);
            if d > best.0 {
                best = (d, v);
            }
        }
        assert!((best.1 - -0.22278).abs() < 1e-3, "peak at {}", best.1);
        assert_rel(best.0, 0.1806556, 1e-5);
    }

    #[test]
    fn continuous_across_regime_boundaries() {
        for b in BOUNDARIES {
            let left = landau_density(prev_float(b));
            let right = landau_density(b);
            assert_rel(left, right, 1e-6);
        }
    }

    #[test]
    fn left_tail_underflow_is_exact_zero() {
        for v in [-24.5, -30.0, -1000.0, -1e300, f64::NEG_INFINITY] {
            let d = landau_density(v);
            assert_eq!(d, 0.0, "v = {v}");
        }
        // exp(-1/u) underflows before the guard engages
        assert_eq!(landau_density(-10.0), 0.0);
    }

    #[test]
    fn non_negative_and_finite_over_the_line() {
        let mut v = -40.0;
        while v < 1e6 {
            let d = landau_density(v);
            assert!(d.is_finite() && d >= 0.0, "v = {v}: {d}");
            v = if v < 400.0 { v + 0.01 } else { v * 1.01 };
        }
    }

    #[test]
    fn right_tail_decays_like_inverse_square() {
        for v in [1e4, 1e6, 1e8] {
            let d = landau_density(v);
            assert!((d * v * v - 1.0).abs() < 0.01, "v = {v}: v^2 f = {}", d * v * v);
        }
    }

    #[test]
    fn infinities_are_zero() {
        assert_eq!(landau_density(f64::INFINITY), 0.0);
        assert_eq!(landau_density(f64::NEG_INFINITY), 0.0);
        assert_eq!(landau_scalar(f64::INFINITY, 3.0, 2.0), 0.0);
    }

    #[test]
    fn nan_propagates() {
        assert!(landau_density(f64::NAN).is_nan());
        assert!(landau_pdf_scalar(f64::NAN, 1.0, 0.0).is_nan());
    }

    #[test]
    fn degenerate_scale_is_zero() {
        for s in [0.0, -0.0, -1.0, f64::NEG_INFINITY] {
            assert_eq!(landau_pdf_scalar(0.3, s, 0.0), 0.0);
            assert_eq!(landau_scalar(0.3, 0.0, s), 0.0);
        }
        // the scale check precedes any use of x
        assert_eq!(landau_pdf_scalar(f64::NAN, 0.0, 0.0), 0.0);
    }

    #[test]
    fn pdf_scales_by_inverse_xi() {
        let (x, xi, x0) = (3.0, 2.0, 1.0);
        assert_eq!(landau_pdf_scalar(x, xi, x0), landau_density(1.0) / 2.0);
        assert_rel(landau_pdf_scalar(x, xi, x0), 0.072603318565431, 1e-14);
    }

    #[test]
    fn location_scale_divides_once() {
        for &(x, mpv, sigma) in &[(1.5, 1.0, 0.5), (-3.0, 2.0, 4.0), (250.0, 0.0, 0.7)] {
            let z = (x - mpv) / sigma;
            assert_eq!(landau_scalar(x, mpv, sigma), landau_pdf_scalar(z, 1.0, 0.0));
            assert_eq!(landau_scalar(x, mpv, sigma), landau_density(z));
        }
    }

    #[test]
    fn mixture_is_linear() {
        let (s0, m0, g0, s1, m1, g1) = (100.0, 1.0, 0.5, 40.0, 6.0, 2.0);
        for x in [-2.0, 0.0, 1.5, 3.0, 10.0, 40.0] {
            let lhs = landau_fit_scalar(x, s0, m0, g0, s1, m1, g1);
            let rhs = s0 * landau_scalar(x, m0, g0) + s1 * landau_scalar(x, m1, g1);
            assert_eq!(lhs, rhs);
        }
        assert_rel(
            landau_fit_scalar(1.5, s0, m0, g0, s1, m1, g1),
            15.439402232682003,
            1e-13,
        );
        // a degenerate component drops out
        assert_eq!(
            landau_fit_scalar(1.5, s0, m0, g0, s1, m1, 0.0),
            s0 * landau_scalar(1.5, m0, g0)
        );
    }

    #[cfg(feature = "simd")]
    #[test]
    fn simd_density_matches_scalar_lanewise() {
        let probes = [
            f64::NEG_INFINITY, -1000.0, -25.0, -6.0, -5.5, -3.0, -1.0, -0.22278, 0.0, 0.5,
            1.0, 4.99, 5.0, 11.0, 12.0, 49.0, 50.0, 299.0, 300.0, 1e6, f64::INFINITY, f64::NAN,
        ];
        for chunk in probes.chunks(4) {
            let mut lanes = [0.0; 4];
            lanes[..chunk.len()].copy_from_slice(chunk);
            let got = landau_density_simd(Simd::<f64, 4>::from_array(lanes));
            for (j, &v) in lanes.iter().enumerate() {
                assert_eq!(got[j].to_bits(), landau_density(v).to_bits(), "v = {v}");
            }
        }
    }
}
