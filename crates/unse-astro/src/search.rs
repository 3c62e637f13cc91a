//! Root finding over angular functions of time.

/// Wrap an angle into (-180, 180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Walk from `jd_start` in steps of `step` days (negative = backwards) until
/// `f` changes sign from negative to non-negative in the walking direction,
/// then bisect the bracket down to `tolerance` days.
///
/// `f` must be continuous near its roots; angular functions should be passed
/// through [`normalize_to_pm180`] so the wrap at ±180 never looks like a
/// crossing. Returns `Ok(None)` when no crossing is found within `max_steps`.
pub fn find_zero_crossing<E>(
    f: &dyn Fn(f64) -> Result<f64, E>,
    jd_start: f64,
    step: f64,
    max_steps: usize,
    max_iterations: usize,
    tolerance: f64,
) -> Result<Option<f64>, E> {
    let mut t0 = jd_start;
    let mut f0 = f(t0)?;
    for _ in 0..max_steps {
        let t1 = t0 + step;
        let f1 = f(t1)?;
        // Only sign changes through zero count; the ±180 wrap flips from
        // large positive to large negative.
        let crossed = if step > 0.0 {
            f0 < 0.0 && f1 >= 0.0 && (f1 - f0).abs() < 180.0
        } else {
            f0 >= 0.0 && f1 < 0.0 && (f1 - f0).abs() < 180.0
        };
        if crossed {
            return bisect(f, t0, t1, f0, max_iterations, tolerance).map(Some);
        }
        t0 = t1;
        f0 = f1;
    }
    Ok(None)
}

fn bisect<E>(
    f: &dyn Fn(f64) -> Result<f64, E>,
    mut a: f64,
    mut b: f64,
    mut fa: f64,
    max_iterations: usize,
    tolerance: f64,
) -> Result<f64, E> {
    for _ in 0..max_iterations {
        if (b - a).abs() < tolerance {
            break;
        }
        let mid = 0.5 * (a + b);
        let fm = f(mid)?;
        if (fa < 0.0) == (fm < 0.0) {
            a = mid;
            fa = fm;
        } else {
            b = mid;
        }
    }
    Ok(0.5 * (a + b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pm180_wrap() {
        assert_eq!(normalize_to_pm180(190.0), -170.0);
        assert_eq!(normalize_to_pm180(-190.0), 170.0);
        assert_eq!(normalize_to_pm180(180.0), 180.0);
    }

    #[test]
    fn finds_linear_root_forwards_and_backwards() {
        let f = |t: f64| -> Result<f64, ()> { Ok(t - 10.25) };
        let fwd = find_zero_crossing(&f, 0.0, 1.0, 100, 60, 1e-9).unwrap().unwrap();
        assert!((fwd - 10.25).abs() < 1e-6);
        let bwd = find_zero_crossing(&f, 20.0, -1.0, 100, 60, 1e-9).unwrap().unwrap();
        assert!((bwd - 10.25).abs() < 1e-6);
    }

    #[test]
    fn angular_wrap_is_not_a_crossing() {
        // A longitude sweeping through 180° relative to the target.
        let f = |t: f64| -> Result<f64, ()> { Ok(normalize_to_pm180(170.0 + t)) };
        assert_eq!(find_zero_crossing(&f, 0.0, 1.0, 30, 60, 1e-9).unwrap(), None);
    }
}
