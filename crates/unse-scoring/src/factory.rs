//! Declarative weighted-sum score calculators.
//!
//! A [`ScoreConfig`] lists components, each an extractor pulling a raw value
//! out of the input, a normalizer mapping it onto [0, 100], and a weight.
//! The calculator built from it returns `clamp(Σ weight · normalize(raw))`.

use serde::Serialize;

use crate::normalize::clamp_score;

pub type Extractor<I> = Box<dyn Fn(&I) -> f64 + Send + Sync>;
pub type Normalizer = Box<dyn Fn(f64) -> f64 + Send + Sync>;

pub struct ScoreComponent<I> {
    pub name: &'static str,
    pub weight: f64,
    extractor: Extractor<I>,
    normalize: Normalizer,
}

impl<I> ScoreComponent<I> {
    pub fn new(
        name: &'static str,
        weight: f64,
        extractor: impl Fn(&I) -> f64 + Send + Sync + 'static,
        normalize: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            weight,
            extractor: Box::new(extractor),
            normalize: Box::new(normalize),
        }
    }

    fn evaluate(&self, input: &I) -> ComponentScore {
        let raw = (self.extractor)(input);
        let normalized = clamp_score((self.normalize)(raw));
        ComponentScore {
            name: self.name,
            raw,
            normalized,
            weight: self.weight,
            contribution: normalized * self.weight,
        }
    }
}

impl<I> std::fmt::Debug for ScoreComponent<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreComponent")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// Ordered list of components.
#[derive(Debug)]
pub struct ScoreConfig<I> {
    components: Vec<ScoreComponent<I>>,
}

impl<I> Default for ScoreConfig<I> {
    fn default() -> Self {
        Self {
            components: Vec::new(),
        }
    }
}

impl<I> ScoreConfig<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn component(
        mut self,
        name: &'static str,
        weight: f64,
        extractor: impl Fn(&I) -> f64 + Send + Sync + 'static,
        normalize: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.components
            .push(ScoreComponent::new(name, weight, extractor, normalize));
        self
    }

    pub fn total_weight(&self) -> f64 {
        self.components.iter().map(|c| c.weight).sum()
    }
}

/// One component's share of a calculated score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScore {
    pub name: &'static str,
    pub raw: f64,
    pub normalized: f64,
    pub weight: f64,
    pub contribution: f64,
}

#[derive(Debug)]
pub struct ScoreCalculator<I> {
    components: Vec<ScoreComponent<I>>,
}

pub fn create_score_calculator<I>(config: ScoreConfig<I>) -> ScoreCalculator<I> {
    ScoreCalculator {
        components: config.components,
    }
}

impl<I> ScoreCalculator<I> {
    pub fn calculate(&self, input: &I) -> f64 {
        let sum: f64 = self
            .components
            .iter()
            .map(|c| c.evaluate(input).contribution)
            .sum();
        clamp_score(sum)
    }

    pub fn breakdown(&self, input: &I) -> Vec<ComponentScore> {
        self.components.iter().map(|c| c.evaluate(input)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{from_neutral, percent};

    struct Sample {
        a: f64,
        b: f64,
    }

    fn calculator() -> ScoreCalculator<Sample> {
        create_score_calculator(
            ScoreConfig::new()
                .component("a", 0.6, |s: &Sample| s.a, percent)
                .component("b", 0.4, |s: &Sample| s.b, from_neutral),
        )
    }

    #[test]
    fn weighted_sum() {
        let calc = calculator();
        // 0.6 · 50 + 0.4 · 60
        let score = calc.calculate(&Sample { a: 0.5, b: 10.0 });
        assert!((score - 54.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_sums_to_score() {
        let calc = calculator();
        let input = Sample { a: 0.9, b: -20.0 };
        let parts = calc.breakdown(&input);
        assert_eq!(parts.len(), 2);
        let sum: f64 = parts.iter().map(|p| p.contribution).sum();
        assert!((sum - calc.calculate(&input)).abs() < 1e-9);
        assert_eq!(parts[1].normalized, 30.0);
    }

    #[test]
    fn result_is_clamped() {
        let calc = create_score_calculator(
            ScoreConfig::new().component("over", 2.0, |s: &Sample| s.a, percent),
        );
        assert_eq!(calc.calculate(&Sample { a: 1.0, b: 0.0 }), 100.0);
    }

    #[test]
    fn empty_config_scores_zero() {
        let calc = create_score_calculator(ScoreConfig::<Sample>::new());
        assert_eq!(calc.calculate(&Sample { a: 1.0, b: 1.0 }), 0.0);
    }
}
