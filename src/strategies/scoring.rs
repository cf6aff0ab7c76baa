//! 📊 Confidence scoring
//!
//! Composite score from four weighted signals:
//! - 30/20/10 Trend (Up/Sideways/Down)
//! - 25 Net Delta positive
//! - 25 Net Theta positive
//! - 20 IV structure positive (near richer than far)
//!
//! Minus 15 when earnings are close and the gate rank is high. The sum is
//! not clamped and can drop below zero.

use crate::config::AdvisorConfig;
use crate::strategies::types::{Inputs, Trend};

pub const TREND_UP_POINTS: i32 = 30;
pub const TREND_SIDEWAYS_POINTS: i32 = 20;
pub const TREND_DOWN_POINTS: i32 = 10;
pub const DELTA_POINTS: i32 = 25;
pub const THETA_POINTS: i32 = 25;
pub const IV_STRUCTURE_POINTS: i32 = 20;
pub const EARNINGS_PENALTY: i32 = 15;

/// Per-signal contributions, kept around for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub trend: i32,
    pub delta: i32,
    pub theta: i32,
    pub iv_structure: i32,
    pub earnings_penalty: i32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        self.trend + self.delta + self.theta + self.iv_structure - self.earnings_penalty
    }

    pub fn breakdown(&self) -> String {
        format!(
            "score={} (trend={}, delta={}, theta={}, iv={}, earnings=-{})",
            self.total(),
            self.trend,
            self.delta,
            self.theta,
            self.iv_structure,
            self.earnings_penalty
        )
    }
}

/// Derived quantities every stage works from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    pub trend: Trend,
    pub net_delta: f64,
    pub net_theta: f64,
    pub iv_diff: f64,
    pub earnings_days: f64,
    pub gate_rank: f64,
    pub sell_delta: f64,
    pub sell_dte: f64,
}

impl Signals {
    /// `inputs` must already be sanitised (finite fields, defaults applied).
    pub fn from_inputs(inputs: &Inputs, earnings_days: f64, sell_dte: f64) -> Self {
        Self {
            trend: inputs.trend,
            net_delta: inputs.buy_delta + inputs.sell_delta,
            net_theta: inputs.buy_theta + inputs.sell_theta,
            iv_diff: inputs.iv_near - inputs.iv_far,
            earnings_days,
            gate_rank: inputs.total_iv_rank,
            sell_delta: inputs.sell_delta,
            sell_dte,
        }
    }

    /// Earnings are close and volatility is elevated.
    pub fn earnings_risk(&self, config: &AdvisorConfig) -> bool {
        self.earnings_days <= config.earnings_window_days
            && self.gate_rank > config.earnings_iv_rank_gate
    }
}

pub fn score(signals: &Signals, config: &AdvisorConfig) -> ScoreBreakdown {
    let trend = match signals.trend {
        Trend::Up => TREND_UP_POINTS,
        Trend::Sideways => TREND_SIDEWAYS_POINTS,
        Trend::Down => TREND_DOWN_POINTS,
    };

    ScoreBreakdown {
        trend,
        delta: if signals.net_delta > 0.0 { DELTA_POINTS } else { 0 },
        theta: if signals.net_theta > 0.0 { THETA_POINTS } else { 0 },
        iv_structure: if signals.iv_diff > 0.0 {
            IV_STRUCTURE_POINTS
        } else {
            0
        },
        earnings_penalty: if signals.earnings_risk(config) {
            EARNINGS_PENALTY
        } else {
            0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(trend: Trend, net_delta: f64, net_theta: f64, iv_diff: f64) -> Signals {
        Signals {
            trend,
            net_delta,
            net_theta,
            iv_diff,
            earnings_days: 999.0,
            gate_rank: 0.0,
            sell_delta: 0.0,
            sell_dte: 999.0,
        }
    }

    #[test]
    fn test_all_signals_positive_is_100() {
        let s = score(&signals(Trend::Up, 0.5, 0.05, 10.0), &AdvisorConfig::default());
        assert_eq!(s.total(), 100);
    }

    #[test]
    fn test_trend_only() {
        let cfg = AdvisorConfig::default();
        assert_eq!(score(&signals(Trend::Up, 0.0, 0.0, 0.0), &cfg).total(), 30);
        assert_eq!(score(&signals(Trend::Sideways, 0.0, 0.0, 0.0), &cfg).total(), 20);
        assert_eq!(score(&signals(Trend::Down, -1.0, -1.0, -1.0), &cfg).total(), 10);
    }

    #[test]
    fn test_earnings_penalty_gate() {
        let cfg = AdvisorConfig::default();
        let mut s = signals(Trend::Up, 1.0, 1.0, 1.0);
        s.earnings_days = 5.0;
        s.gate_rank = 71.0;
        assert_eq!(score(&s, &cfg).total(), 85);

        // Gate is strict: exactly 70 does not trigger.
        s.gate_rank = 70.0;
        assert_eq!(score(&s, &cfg).total(), 100);

        s.gate_rank = 90.0;
        s.earnings_days = 6.0;
        assert_eq!(score(&s, &cfg).total(), 100);
    }

    #[test]
    fn test_score_is_not_clamped() {
        let cfg = AdvisorConfig::default();
        let mut s = signals(Trend::Down, 0.0, 0.0, 0.0);
        s.earnings_days = 0.0;
        s.gate_rank = 80.0;
        // 10 - 15
        assert_eq!(score(&s, &cfg).total(), -5);
    }

    #[test]
    fn test_breakdown_string() {
        let s = score(&signals(Trend::Sideways, -0.5, 0.05, 25.0), &AdvisorConfig::default());
        assert_eq!(s.breakdown(), "score=65 (trend=20, delta=0, theta=25, iv=20, earnings=-0)");
    }
}
