use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AdvisorError;

/// Where the near/far volatility readings come from.
///
/// Resolved once from configuration, before any [`Inputs`](super::types::Inputs)
/// exist. The evaluator only ever sees the resulting gate rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilitySource {
    /// Near/far readings are IV ranks; the near rank doubles as the gate.
    #[default]
    RankPair,
    /// Near/far readings are ATM term-structure IVs; the gate is a separate
    /// environment-level IV rank.
    TermStructure,
}

impl VolatilitySource {
    /// Pick the rank that gates the earnings penalty.
    pub fn gate_rank(&self, near: f64, total_iv_rank: f64) -> f64 {
        match self {
            VolatilitySource::RankPair => near,
            VolatilitySource::TermStructure => total_iv_rank,
        }
    }
}

impl FromStr for VolatilitySource {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "rank_pair" | "rank" => Ok(VolatilitySource::RankPair),
            "term_structure" | "term" => Ok(VolatilitySource::TermStructure),
            other => Err(AdvisorError::Config(format!(
                "unknown volatility source '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for VolatilitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolatilitySource::RankPair => write!(f, "rank_pair"),
            VolatilitySource::TermStructure => write!(f, "term_structure"),
        }
    }
}
