#![allow(unused)]

/// Absolute tolerance, scaled up for expectations larger than one.
pub fn assert_close(a: f64, e: f64, tol: f64) {
    if e.is_nan() {
        assert!(a.is_nan(), "expected NaN, got {a}");
        return;
    }
    if e.is_infinite() {
        assert!(
            a.is_infinite() && a.is_sign_positive() == e.is_sign_positive(),
            "expected {e}, got {a}"
        );
        return;
    }
    let scale = 1.0_f64.max(e.abs());
    let ok = (a - e).abs() <= tol * scale;
    assert!(ok, "mismatch: got {a}, expect {e} (tol={tol})");
}

/// Relative tolerance; densities in the tails are far below one.
pub fn assert_rel_close(a: f64, e: f64, tol: f64) {
    if e == 0.0 {
        assert_eq!(a, 0.0, "expected exact zero, got {a}");
        return;
    }
    let rel = ((a - e) / e).abs();
    assert!(rel <= tol, "mismatch: got {a}, expect {e} (rel={rel:e}, tol={tol})");
}

pub fn assert_slice_close(a: &[f64], e: &[f64], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        if ei.is_nan() {
            assert!(ai.is_nan(), "idx {i}: expected NaN, got {ai}");
            continue;
        }
        let scale = 1.0_f64.max(ei.abs());
        let ok = (ai - ei).abs() <= tol * scale;
        assert!(ok, "idx {i}: got {ai}, expect {ei} (tol={tol})");
    }
}

pub fn assert_slice_rel_close(a: &[f64], e: &[f64], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        if ei.is_nan() {
            assert!(ai.is_nan(), "idx {i}: expected NaN, got {ai}");
            continue;
        }
        if ei == 0.0 {
            assert_eq!(ai, 0.0, "idx {i}: expected exact zero, got {ai}");
            continue;
        }
        let rel = ((ai - ei) / ei).abs();
        assert!(rel <= tol, "idx {i}: got {ai}, expect {ei} (rel={rel:e}, tol={tol})");
    }
}

/// Composite trapezoid rule over `n` panels.
pub fn trapezoid<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, n: usize) -> f64 {
    let h = (b - a) / n as f64;
    let mut acc = 0.5 * (f(a) + f(b));
    for i in 1..n {
        acc += f(a + i as f64 * h);
    }
    acc * h
}
