use crate::strategies::scoring::Signals;
use crate::strategies::types::StrategyName;

/// One-line summary: trend, net Δ, net Θ, IV diff, score, strategy, then any
/// warnings.
pub fn explain(signals: &Signals, score: i32, name: StrategyName, warnings: &[String]) -> String {
    let mut text = format!(
        "Trend: {}; net Δ={:.2}; net Θ={:.2}; IV structure diff (near-far)={:.2}; score={} → strategy: {}",
        signals.trend, signals.net_delta, signals.net_theta, signals.iv_diff, score, name
    );

    if !warnings.is_empty() {
        text.push_str("; ⚠️ Notes: ");
        text.push_str(&warnings.join(" / "));
    }

    text
}
