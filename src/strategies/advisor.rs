//! Advisory layer: open/small/wait, risk warnings, strike-delta guidance and
//! position-adjustment hints. Everything here is threshold rules over the
//! derived [`Signals`].

use crate::config::AdvisorConfig;
use crate::strategies::scoring::Signals;
use crate::strategies::types::{Advice, StrategyName, StrikeGuide};

pub const PMCC_NET_DELTA_BAND: (f64, f64) = (0.35, 0.65);
pub const PUT_DIAGONAL_NET_DELTA_BAND: (f64, f64) = (-0.15, 0.15);
/// Short legs above this |Δ| are at risk of being assigned.
pub const SHORT_DELTA_ROLL_TRIGGER: f64 = 0.45;
/// Short legs below this |Δ| have little time value left to harvest.
pub const SHORT_DELTA_DECAYED: f64 = 0.15;
pub const SHORT_DTE_BUYBACK_DAYS: f64 = 10.0;
pub const WEAK_THETA: f64 = 0.01;

pub const WARN_IV_STRUCTURE: &str = "Diagonal structure warning: far-dated IV is at or above near-dated IV, so the position buys the rich leg and sells the cheap one. Not suitable for a diagonal/PMCC.";
pub const WARN_NEGATIVE_THETA: &str = "Theta is not positive: the position is bleeding time value. Move the short leg further out of the money or shorten its DTE.";
pub const WARN_EARNINGS: &str = "Earnings are close and near-term IV rank is high: trade small or wait for the IV crush before buying the long leg.";

pub const ADJ_ROLL_SHORT: &str = "Short leg |Δ| > 0.45: consider rolling up (higher strike) or out (later expiry) to lower the chance of assignment.";
pub const ADJ_BUY_BACK_EARLY: &str = "Short leg DTE ≤ 10 with |Δ| < 0.15: consider buying it back early and selling the next cycle to lock in the remaining theta.";
pub const ADJ_PMCC_DELTA_LOW: &str = "Net Δ below 0.35: move the long leg deeper ITM (Δ up) or the short leg further OTM (short Δ down) to add directionality.";
pub const ADJ_PMCC_DELTA_HIGH: &str = "Net Δ above 0.65: move the short leg toward ATM (short Δ up) or the long leg further out (Δ down) to reduce directional exposure.";
pub const ADJ_PUT_DELTA_LOW: &str = "Net Δ < -0.15: move the short leg up (smaller |Δ|) or the long leg closer to ATM to bring net Δ back into -0.15 to +0.15.";
pub const ADJ_PUT_DELTA_HIGH: &str = "Net Δ > +0.15: move the short leg down (larger |Δ|) or the long leg further OTM to bring net Δ back into -0.15 to +0.15.";
pub const ADJ_WEAK_THETA: &str = "Net Θ is weak: shorten the short leg to 15–30 DTE, move it nearer ATM (Δ ≈ 0.25–0.35), or wait for higher IV before opening.";

pub fn advice(score: i32, config: &AdvisorConfig) -> Advice {
    if score >= config.open_score_threshold {
        Advice::Open
    } else if score >= config.small_score_threshold {
        Advice::Small
    } else {
        Advice::Wait
    }
}

/// Every applicable warning, in a fixed order.
pub fn warnings(signals: &Signals, config: &AdvisorConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if signals.iv_diff <= 0.0 {
        warnings.push(WARN_IV_STRUCTURE.to_string());
    }
    if signals.net_theta <= 0.0 {
        warnings.push(WARN_NEGATIVE_THETA.to_string());
    }
    if signals.earnings_risk(config) {
        warnings.push(WARN_EARNINGS.to_string());
    }

    warnings
}

pub fn strike_guide(name: StrategyName) -> Option<StrikeGuide> {
    match name {
        StrategyName::PmccCallDiagonal => Some(StrikeGuide {
            long_delta_range: Some((0.75, 0.85)),
            short_delta_range: Some((0.20, 0.35)),
            note: "Target net Δ ≈ 0.35–0.65. Buy the far-dated leg deep ITM (Δ ≈ 0.8), sell the near-dated leg OTM (Δ ≈ 0.25–0.35).".to_string(),
        }),
        StrategyName::PutDiagonal => Some(StrikeGuide {
            long_delta_range: Some((-0.45, -0.25)),
            short_delta_range: Some((-0.35, -0.20)),
            note: "Target net Δ ≈ -0.15 to +0.15 with net Θ > 0. If net Δ runs negative, move the short leg up (smaller |Δ|).".to_string(),
        }),
        StrategyName::BearCallSpread => Some(StrikeGuide {
            long_delta_range: None,
            short_delta_range: Some((0.20, 0.35)),
            note: "Sell the near-dated call at overhead resistance (Δ ≈ 0.25) and buy a further OTM call as protection. 7–20 days to expiry collects theta faster.".to_string(),
        }),
        StrategyName::WaitStructureNotFavorable => None,
    }
}

/// Every applicable adjustment hint, in a fixed order.
pub fn adjustments(signals: &Signals, name: StrategyName) -> Vec<String> {
    let mut hints = Vec::new();
    let short_abs = signals.sell_delta.abs();

    // 1) Short leg too close to the money
    if name.is_diagonal() && short_abs > SHORT_DELTA_ROLL_TRIGGER {
        hints.push(ADJ_ROLL_SHORT.to_string());
    }

    // 2) Short leg nearly expired and nearly worthless
    if signals.sell_dte <= SHORT_DTE_BUYBACK_DAYS && short_abs < SHORT_DELTA_DECAYED {
        hints.push(ADJ_BUY_BACK_EARLY.to_string());
    }

    // 3) Net delta outside the strategy's band
    match name {
        StrategyName::PmccCallDiagonal => {
            let (low, high) = PMCC_NET_DELTA_BAND;
            if signals.net_delta < low {
                hints.push(ADJ_PMCC_DELTA_LOW.to_string());
            } else if signals.net_delta > high {
                hints.push(ADJ_PMCC_DELTA_HIGH.to_string());
            }
        }
        StrategyName::PutDiagonal => {
            let (low, high) = PUT_DIAGONAL_NET_DELTA_BAND;
            if signals.net_delta < low {
                hints.push(ADJ_PUT_DELTA_LOW.to_string());
            } else if signals.net_delta > high {
                hints.push(ADJ_PUT_DELTA_HIGH.to_string());
            }
        }
        _ => {}
    }

    // 4) Theta too weak to be worth holding
    if signals.net_theta <= WEAK_THETA {
        hints.push(ADJ_WEAK_THETA.to_string());
    }

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::types::Trend;

    fn signals() -> Signals {
        Signals {
            trend: Trend::Up,
            net_delta: 0.5,
            net_theta: 0.05,
            iv_diff: 10.0,
            earnings_days: 999.0,
            gate_rank: 0.0,
            sell_delta: 0.3,
            sell_dte: 30.0,
        }
    }

    #[test]
    fn test_advice_boundaries() {
        let cfg = AdvisorConfig::default();
        assert_eq!(advice(80, &cfg), Advice::Open);
        assert_eq!(advice(79, &cfg), Advice::Small);
        assert_eq!(advice(60, &cfg), Advice::Small);
        assert_eq!(advice(59, &cfg), Advice::Wait);
        assert_eq!(advice(-5, &cfg), Advice::Wait);
        assert_eq!(advice(100, &cfg), Advice::Open);
    }

    #[test]
    fn test_warnings_ordered_and_independent() {
        let cfg = AdvisorConfig::default();
        assert!(warnings(&signals(), &cfg).is_empty());

        let mut s = signals();
        s.iv_diff = 0.0;
        s.net_theta = 0.0;
        s.earnings_days = 2.0;
        s.gate_rank = 75.0;
        assert_eq!(
            warnings(&s, &cfg),
            vec![WARN_IV_STRUCTURE, WARN_NEGATIVE_THETA, WARN_EARNINGS]
        );
    }

    #[test]
    fn test_strike_guide_per_strategy() {
        let pmcc = strike_guide(StrategyName::PmccCallDiagonal).unwrap();
        assert_eq!(pmcc.long_delta_range, Some((0.75, 0.85)));
        assert_eq!(pmcc.short_delta_range, Some((0.20, 0.35)));

        let put = strike_guide(StrategyName::PutDiagonal).unwrap();
        assert_eq!(put.long_delta_range, Some((-0.45, -0.25)));
        assert_eq!(put.short_delta_range, Some((-0.35, -0.20)));

        let bear = strike_guide(StrategyName::BearCallSpread).unwrap();
        assert_eq!(bear.long_delta_range, None);
        assert!(bear.note.contains("7–20 days"));

        assert!(strike_guide(StrategyName::WaitStructureNotFavorable).is_none());
    }

    #[test]
    fn test_roll_only_for_diagonals() {
        let mut s = signals();
        s.sell_delta = -0.5;
        assert!(adjustments(&s, StrategyName::PutDiagonal).contains(&ADJ_ROLL_SHORT.to_string()));
        assert!(!adjustments(&s, StrategyName::BearCallSpread).contains(&ADJ_ROLL_SHORT.to_string()));
    }

    #[test]
    fn test_buy_back_fires_for_any_strategy() {
        let mut s = signals();
        s.sell_dte = 10.0;
        s.sell_delta = 0.1;
        let hints = adjustments(&s, StrategyName::WaitStructureNotFavorable);
        assert_eq!(hints, vec![ADJ_BUY_BACK_EARLY]);
    }

    #[test]
    fn test_net_delta_band_hints() {
        let mut s = signals();
        s.net_delta = 0.2;
        assert_eq!(adjustments(&s, StrategyName::PmccCallDiagonal), vec![ADJ_PMCC_DELTA_LOW]);
        s.net_delta = 0.9;
        assert_eq!(adjustments(&s, StrategyName::PmccCallDiagonal), vec![ADJ_PMCC_DELTA_HIGH]);
        s.net_delta = 0.5;
        assert!(adjustments(&s, StrategyName::PmccCallDiagonal).is_empty());

        s.sell_delta = -0.28;
        s.net_delta = -0.58;
        assert_eq!(adjustments(&s, StrategyName::PutDiagonal), vec![ADJ_PUT_DELTA_LOW]);
        s.net_delta = 0.2;
        assert_eq!(adjustments(&s, StrategyName::PutDiagonal), vec![ADJ_PUT_DELTA_HIGH]);
    }

    #[test]
    fn test_weak_theta_threshold_inclusive() {
        let mut s = signals();
        s.net_theta = 0.01;
        assert_eq!(adjustments(&s, StrategyName::PmccCallDiagonal), vec![ADJ_WEAK_THETA]);
    }
}
