//! Aspect classification between ecliptic longitudes.
//!
//! Aspect angles are spaced wider than the sum of neighbouring orbs, so at
//! most one aspect matches any separation.

use unse_core::models::{AspectHit, AspectResult, AspectType, Chart};

/// Shortest angular separation in [0, 180].
pub fn separation(lon1: f64, lon2: f64) -> f64 {
    let d = (lon1 - lon2).abs().rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Classify the separation of two longitudes. Orb limits are inclusive.
pub fn get_aspect(lon1: f64, lon2: f64) -> AspectResult {
    let diff = separation(lon1, lon2);
    AspectType::ALL
        .iter()
        .map(|&t| (t, (diff - t.angle()).abs()))
        .find(|&(t, orb)| orb <= t.max_orb())
        .map(|(t, orb)| AspectResult {
            aspect: Some(t),
            orb,
        })
        .unwrap_or(AspectResult {
            aspect: None,
            orb: diff,
        })
}

/// Every matching aspect from a transit body to a natal body, tightest
/// first. Lunar nodes are left out on the transit side.
pub fn cross_aspects(transit: &Chart, natal: &Chart) -> Vec<AspectHit> {
    let mut hits: Vec<AspectHit> = transit
        .planets
        .iter()
        .filter(|t| !t.body.is_node())
        .flat_map(|t| {
            natal.planets.iter().filter_map(move |n| {
                let r = get_aspect(t.longitude, n.longitude);
                r.aspect.map(|aspect| AspectHit {
                    planet1: t.body,
                    planet2: n.body,
                    aspect: Some(aspect),
                    orb: r.orb,
                })
            })
        })
        .collect();
    hits.sort_by(|a, b| {
        a.orb
            .total_cmp(&b.orb)
            .then(a.planet1.cmp(&b.planet1))
            .then(a.planet2.cmp(&b.planet2))
    });
    hits
}
