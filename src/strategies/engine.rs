use tracing::debug;

use crate::config::AdvisorConfig;
use crate::strategies::advisor;
use crate::strategies::classifier::classify;
use crate::strategies::explain::explain;
use crate::strategies::normalize::{finite_or, DEFAULT_GREEK, FAR_AWAY_DAYS};
use crate::strategies::scoring::{score, Signals};
use crate::strategies::types::{Inputs, StrategyResult};

/// Stateless evaluator. Holds only thresholds; every call is a pure function
/// of its input snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: AdvisorConfig,
}

impl Evaluator {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Normalize → score/classify → advise → explain.
    pub fn evaluate(&self, inputs: &Inputs) -> StrategyResult {
        let clean = sanitize(inputs);
        let earnings_days = clean.earnings_days.unwrap_or(FAR_AWAY_DAYS);
        let sell_dte = clean.sell_dte.unwrap_or(FAR_AWAY_DAYS);
        let signals = Signals::from_inputs(&clean, earnings_days, sell_dte);

        let breakdown = score(&signals, &self.config);
        let total = breakdown.total();
        let (side, name) = classify(&signals);

        let advice = advisor::advice(total, &self.config);
        let warnings = advisor::warnings(&signals, &self.config);
        let strike_guide = advisor::strike_guide(name);
        let adjustments = advisor::adjustments(&signals, name);
        let explanation = explain(&signals, total, name, &warnings);

        debug!(
            "🧮 {} → {} / {:?} | {} | {} warnings, {} adjustments",
            signals.trend,
            name,
            advice,
            breakdown.breakdown(),
            warnings.len(),
            adjustments.len()
        );

        StrategyResult {
            side,
            name,
            score: total,
            advice,
            net_delta: signals.net_delta,
            net_theta: signals.net_theta,
            iv_diff: signals.iv_diff,
            warnings,
            adjustments,
            strike_guide,
            explanation,
        }
    }
}

/// Evaluate with the default thresholds.
pub fn evaluate(inputs: &Inputs) -> StrategyResult {
    Evaluator::default().evaluate(inputs)
}

// Directly constructed inputs can carry NaN/inf; treat them like bad form input.
fn sanitize(inputs: &Inputs) -> Inputs {
    let days = |v: Option<f64>| v.map(|d| finite_or(d, FAR_AWAY_DAYS));
    Inputs {
        trend: inputs.trend,
        earnings_days: days(inputs.earnings_days),
        iv_near: finite_or(inputs.iv_near, DEFAULT_GREEK),
        iv_far: finite_or(inputs.iv_far, DEFAULT_GREEK),
        total_iv_rank: finite_or(inputs.total_iv_rank, DEFAULT_GREEK),
        buy_delta: finite_or(inputs.buy_delta, DEFAULT_GREEK),
        sell_delta: finite_or(inputs.sell_delta, DEFAULT_GREEK),
        buy_theta: finite_or(inputs.buy_theta, DEFAULT_GREEK),
        sell_theta: finite_or(inputs.sell_theta, DEFAULT_GREEK),
        sell_dte: days(inputs.sell_dte),
        price_near: inputs.price_near.filter(|p| p.is_finite()),
        price_far: inputs.price_far.filter(|p| p.is_finite()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::types::{Advice, Side, StrategyName, Trend};

    fn wait_inputs() -> Inputs {
        Inputs {
            trend: Trend::Sideways,
            earnings_days: None,
            iv_near: 30.0,
            iv_far: 40.0,
            total_iv_rank: 30.0,
            buy_delta: 0.1,
            sell_delta: -0.05,
            buy_theta: -0.05,
            sell_theta: 0.02,
            sell_dte: None,
            price_near: None,
            price_far: None,
        }
    }

    #[test]
    fn test_wait_case_has_no_guide() {
        let result = evaluate(&wait_inputs());
        assert_eq!(result.name, StrategyName::WaitStructureNotFavorable);
        assert_eq!(result.side, Side::Put);
        // 20 + 25 (net Δ 0.05 > 0)
        assert_eq!(result.score, 45);
        assert_eq!(result.advice, Advice::Wait);
        assert!(result.strike_guide.is_none());
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_non_finite_fields_fall_back() {
        let mut inputs = wait_inputs();
        inputs.buy_delta = f64::NAN;
        inputs.sell_delta = f64::INFINITY;
        inputs.earnings_days = Some(f64::NAN);
        inputs.total_iv_rank = 99.0;

        let result = evaluate(&inputs);
        assert_eq!(result.net_delta, 0.0);
        // NaN earnings days reads as "far away", so no penalty.
        assert_eq!(result.score, 20);
    }

    #[test]
    fn test_custom_thresholds() {
        let cfg = AdvisorConfig {
            open_score_threshold: 40,
            small_score_threshold: 20,
            ..AdvisorConfig::default()
        };
        let result = Evaluator::new(cfg).evaluate(&wait_inputs());
        assert_eq!(result.advice, Advice::Open);
    }
}
