//! Transit activity: how strongly today's sky touches the natal chart.

use unse_core::constants::NEUTRAL_SCORE;
use unse_core::models::{AspectHit, AspectType, Body, Category};

use crate::normalize::clamp_score;

/// Points per unit of weighted, tightness-scaled aspect.
const ACTIVITY_SCALE: f64 = 10.0;

fn aspect_weight(aspect: AspectType) -> f64 {
    match aspect {
        AspectType::Trine => 1.0,
        AspectType::Sextile => 0.7,
        AspectType::Conjunction => 0.4,
        AspectType::Square => -0.8,
        AspectType::Opposition => -0.6,
    }
}

/// Slow planets shape a day more than fast ones.
fn planet_weight(body: Body) -> f64 {
    match body {
        Body::Jupiter | Body::Saturn => 1.0,
        Body::Sun | Body::Mars | Body::Venus | Body::Mercury => 0.8,
        Body::Moon => 0.5,
        Body::Uranus | Body::Neptune | Body::Pluto => 0.6,
        Body::NorthNode | Body::SouthNode => 0.3,
    }
}

fn signed_strength(hit: &AspectHit) -> f64 {
    match hit.aspect {
        Some(a) => aspect_weight(a) * hit.tightness() * planet_weight(hit.planet1),
        None => 0.0,
    }
}

/// Activity score in [0, 100], neutral with no aspects.
pub fn activity_score(hits: &[AspectHit]) -> f64 {
    let sum: f64 = hits.iter().map(signed_strength).sum();
    clamp_score(NEUTRAL_SCORE + ACTIVITY_SCALE * sum)
}

/// Life area favoured by the strongest supportive transit.
pub fn best_area(hits: &[AspectHit]) -> Category {
    hits.iter()
        .filter(|h| signed_strength(h) > 0.0)
        .max_by(|a, b| signed_strength(a).total_cmp(&signed_strength(b)))
        .map(|h| area_of(h.planet1))
        .unwrap_or(Category::General)
}

fn area_of(body: Body) -> Category {
    match body {
        Body::Venus => Category::Love,
        Body::Jupiter => Category::Wealth,
        Body::Mercury => Category::Study,
        Body::Mars | Body::Saturn | Body::Sun => Category::Career,
        Body::Moon => Category::Health,
        _ => Category::General,
    }
}

/// Major-transit flag: Jupiter or Saturn return, Saturn opposition, or
/// Jupiter/Saturn conjunct the natal Sun.
pub fn transit_sync(hits: &[AspectHit]) -> bool {
    hits.iter().any(|h| {
        matches!(
            (h.planet1, h.planet2, h.aspect),
            (Body::Jupiter, Body::Jupiter, Some(AspectType::Conjunction))
                | (Body::Saturn, Body::Saturn, Some(AspectType::Conjunction))
                | (Body::Saturn, Body::Saturn, Some(AspectType::Opposition))
                | (Body::Jupiter, Body::Sun, Some(AspectType::Conjunction))
                | (Body::Saturn, Body::Sun, Some(AspectType::Conjunction))
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(p1: Body, p2: Body, aspect: AspectType, orb: f64) -> AspectHit {
        AspectHit {
            planet1: p1,
            planet2: p2,
            aspect: Some(aspect),
            orb,
        }
    }

    #[test]
    fn no_aspects_is_neutral() {
        assert_eq!(activity_score(&[]), NEUTRAL_SCORE);
        assert_eq!(best_area(&[]), Category::General);
        assert!(!transit_sync(&[]));
    }

    #[test]
    fn exact_trine_from_jupiter() {
        let hits = [hit(Body::Jupiter, Body::Sun, AspectType::Trine, 0.0)];
        assert_eq!(activity_score(&hits), 60.0);
        assert_eq!(best_area(&hits), Category::Wealth);
    }

    #[test]
    fn hard_aspects_pull_down() {
        let hits = [
            hit(Body::Saturn, Body::Moon, AspectType::Square, 0.0),
            hit(Body::Mars, Body::Sun, AspectType::Opposition, 4.0),
        ];
        assert!(activity_score(&hits) < NEUTRAL_SCORE);
        assert_eq!(best_area(&hits), Category::General);
    }

    #[test]
    fn strongest_supportive_hit_picks_area() {
        let hits = [
            hit(Body::Venus, Body::Moon, AspectType::Trine, 1.0),
            hit(Body::Mercury, Body::Sun, AspectType::Sextile, 5.0),
        ];
        assert_eq!(best_area(&hits), Category::Love);
    }

    #[test]
    fn saturn_return_is_a_major_transit() {
        let hits = [hit(Body::Saturn, Body::Saturn, AspectType::Conjunction, 2.0)];
        assert!(transit_sync(&hits));
        let hits = [hit(Body::Saturn, Body::Saturn, AspectType::Square, 2.0)];
        assert!(!transit_sync(&hits));
    }
}
