use proptest::prelude::*;
use unse_astro::aspects::{get_aspect, separation};
use unse_core::models::AspectType;

#[test]
fn trine_across_the_chart() {
    let r = get_aspect(120.0, 240.0);
    assert_eq!(r.aspect, Some(AspectType::Trine));
    assert_eq!(r.orb, 0.0);
}

#[test]
fn twenty_degrees_across_aries_is_nothing() {
    let r = get_aspect(350.0, 10.0);
    assert_eq!(r.aspect, None);
    assert_eq!(r.orb, 20.0);
}

#[test]
fn semi_square_is_not_a_major_aspect() {
    let r = get_aspect(0.0, 45.0);
    assert_eq!(r.aspect, None);
    assert_eq!(r.orb, 45.0);
}

#[test]
fn orb_limits_are_inclusive() {
    let cases = [
        (8.0, AspectType::Conjunction),
        (66.0, AspectType::Sextile),
        (54.0, AspectType::Sextile),
        (98.0, AspectType::Square),
        (128.0, AspectType::Trine),
        (172.0, AspectType::Opposition),
    ];
    for (lon, expected) in cases {
        let r = get_aspect(0.0, lon);
        assert_eq!(r.aspect, Some(expected), "at {lon}");
        assert!(r.orb <= expected.max_orb());
    }
}

#[test]
fn just_past_the_orb_limit_is_excluded() {
    let eps = 1e-6;
    assert_eq!(get_aspect(0.0, 8.0 + eps).aspect, None);
    assert_eq!(get_aspect(0.0, 66.0 + eps).aspect, None);
    assert_eq!(get_aspect(0.0, 54.0 - eps).aspect, None);
    assert_eq!(get_aspect(0.0, 172.0 - eps).aspect, None);
}

proptest! {
    #[test]
    fn aspect_is_symmetric(a in -720.0f64..720.0, b in -720.0f64..720.0) {
        prop_assert_eq!(get_aspect(a, b), get_aspect(b, a));
    }

    #[test]
    fn self_aspect_is_exact_conjunction(x in 0.0f64..360.0) {
        let r = get_aspect(x, x);
        prop_assert_eq!(r.aspect, Some(AspectType::Conjunction));
        prop_assert_eq!(r.orb, 0.0);
    }

    #[test]
    fn orb_never_exceeds_limit(a in 0.0f64..360.0, b in 0.0f64..360.0) {
        let r = get_aspect(a, b);
        match r.aspect {
            Some(t) => prop_assert!(r.orb <= t.max_orb()),
            None => prop_assert!((0.0..=180.0).contains(&r.orb)),
        }
    }

    #[test]
    fn separation_is_bounded(a in -1000.0f64..1000.0, b in -1000.0f64..1000.0) {
        let s = separation(a, b);
        prop_assert!((0.0..=180.0).contains(&s));
    }
}
