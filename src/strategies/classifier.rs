use crate::strategies::scoring::Signals;
use crate::strategies::types::{Side, StrategyName, Trend};

/// Pick side and strategy. Rules are checked top to bottom, first match wins:
/// 1. Up, net Δ > 0, net Θ > 0, IV diff > 0 → PMCC / call diagonal
/// 2. Sideways, net Θ > 0, IV diff > 0 → put diagonal
/// 3. Down, net Θ > 0 → bear call spread (always the call side)
/// 4. otherwise wait, with the side still derived from the trend
pub fn classify(signals: &Signals) -> (Side, StrategyName) {
    let trend_side = Side::from_trend(signals.trend);
    let theta_positive = signals.net_theta > 0.0;
    let iv_positive = signals.iv_diff > 0.0;

    match signals.trend {
        Trend::Up if signals.net_delta > 0.0 && theta_positive && iv_positive => {
            (trend_side, StrategyName::PmccCallDiagonal)
        }
        Trend::Sideways if theta_positive && iv_positive => (trend_side, StrategyName::PutDiagonal),
        Trend::Down if theta_positive => (Side::Call, StrategyName::BearCallSpread),
        _ => (trend_side, StrategyName::WaitStructureNotFavorable),
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
    fn test_pmcc_requires_every_signal() {
        assert_eq!(
            classify(&signals(Trend::Up, 0.5, 0.05, 10.0)),
            (Side::Call, StrategyName::PmccCallDiagonal)
        );
        assert_eq!(
            classify(&signals(Trend::Up, 0.0, 0.05, 10.0)),
            (Side::Call, StrategyName::WaitStructureNotFavorable)
        );
        assert_eq!(
            classify(&signals(Trend::Up, 0.5, 0.05, 0.0)),
            (Side::Call, StrategyName::WaitStructureNotFavorable)
        );
    }

    #[test]
    fn test_put_diagonal_ignores_delta() {
        assert_eq!(
            classify(&signals(Trend::Sideways, -0.58, 0.05, 25.0)),
            (Side::Put, StrategyName::PutDiagonal)
        );
        assert_eq!(
            classify(&signals(Trend::Sideways, 0.2, -0.01, 25.0)),
            (Side::Put, StrategyName::WaitStructureNotFavorable)
        );
    }

    #[test]
    fn test_bear_call_overrides_side() {
        assert_eq!(
            classify(&signals(Trend::Down, -1.0, 0.1, -5.0)),
            (Side::Call, StrategyName::BearCallSpread)
        );
        assert_eq!(
            classify(&signals(Trend::Down, 0.3, 0.0, 12.0)),
            (Side::Neutral, StrategyName::WaitStructureNotFavorable)
        );
    }
}
