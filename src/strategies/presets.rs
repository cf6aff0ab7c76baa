use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AdvisorError;
use crate::strategies::types::{Inputs, Trend};

/// Ready-made snapshots for filling the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Bullish,
    Sideways,
    Bearish,
}

impl Preset {
    pub fn all() -> [Preset; 3] {
        [Preset::Bullish, Preset::Sideways, Preset::Bearish]
    }

    /// Rank-pair readings, so the gate rank equals the near rank.
    pub fn inputs(&self) -> Inputs {
        match self {
            Preset::Bullish => Inputs {
                trend: Trend::Up,
                earnings_days: Some(10.0),
                iv_near: 70.0,
                iv_far: 40.0,
                total_iv_rank: 70.0,
                buy_delta: 0.8,
                sell_delta: 0.25,
                buy_theta: -0.04,
                sell_theta: 0.09,
                sell_dte: Some(21.0),
                price_near: Some(205.0),
                price_far: Some(207.0),
            },
            Preset::Sideways => Inputs {
                trend: Trend::Sideways,
                earnings_days: Some(3.0),
                iv_near: 65.0,
                iv_far: 40.0,
                total_iv_rank: 65.0,
                buy_delta: -0.30,
                sell_delta: -0.28,
                buy_theta: -0.03,
                sell_theta: 0.08,
                sell_dte: Some(12.0),
                price_near: Some(205.0),
                price_far: Some(206.0),
            },
            Preset::Bearish => Inputs {
                trend: Trend::Down,
                earnings_days: Some(7.0),
                iv_near: 72.0,
                iv_far: 60.0,
                total_iv_rank: 72.0,
                buy_delta: 0.0,
                sell_delta: 0.28,
                buy_theta: 0.0,
                sell_theta: 0.10,
                sell_dte: Some(9.0),
                price_near: None,
                price_far: None,
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Bullish => write!(f, "bullish"),
            Preset::Sideways => write!(f, "sideways"),
            Preset::Bearish => write!(f, "bearish"),
        }
    }
}

impl FromStr for Preset {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bullish" => Ok(Preset::Bullish),
            "sideways" => Ok(Preset::Sideways),
            "bearish" => Ok(Preset::Bearish),
            other => Err(AdvisorError::UnknownPreset(other.to_string())),
        }
    }
}
