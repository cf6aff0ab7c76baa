use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Sideways,
    Down,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "Up"),
            Trend::Sideways => write!(f, "Sideways"),
            Trend::Down => write!(f, "Down"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Call,
    Put,
    Neutral,
}

impl Side {
    /// Side implied by the trend alone, before any strategy override.
    pub fn from_trend(trend: Trend) -> Self {
        match trend {
            Trend::Up => Side::Call,
            Trend::Sideways => Side::Put,
            Trend::Down => Side::Neutral,
        }
    }
}

/// Strategy identity. The serialized label is the stable key; display text
/// lives in `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyName {
    #[serde(rename = "PMCC/CallDiagonal")]
    PmccCallDiagonal,
    #[serde(rename = "PutDiagonal")]
    PutDiagonal,
    #[serde(rename = "BearCallSpread")]
    BearCallSpread,
    #[serde(rename = "WaitStructureNotFavorable")]
    WaitStructureNotFavorable,
}

impl StrategyName {
    /// Whether this is an actual position (as opposed to the wait fallback).
    pub fn is_recognized(&self) -> bool {
        !matches!(self, StrategyName::WaitStructureNotFavorable)
    }

    /// PMCC and the put diagonal are the two-expiration structures.
    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            StrategyName::PmccCallDiagonal | StrategyName::PutDiagonal
        )
    }
}

impl fmt::Display for StrategyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyName::PmccCallDiagonal => write!(f, "PMCC / Call Diagonal"),
            StrategyName::PutDiagonal => write!(f, "Put Diagonal"),
            StrategyName::BearCallSpread => write!(f, "Bear Call Spread"),
            StrategyName::WaitStructureNotFavorable => {
                write!(f, "Wait / structure not favorable")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Advice {
    Open,
    Small,
    Wait,
}

impl Advice {
    /// Badge text shown next to the recommendation.
    pub fn label(&self) -> &'static str {
        match self {
            Advice::Open => "✅ Strong open",
            Advice::Small => "⚙️ Small size, observe",
            Advice::Wait => "⚠️ Wait for structure repair",
        }
    }
}

/// One evaluation request, already normalized.
///
/// `total_iv_rank` is the environment volatility gate used by the earnings
/// penalty. Which number lands there depends on the configured
/// [`VolatilitySource`](super::volatility::VolatilitySource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    pub trend: Trend,
    #[serde(default)]
    pub earnings_days: Option<f64>,
    pub iv_near: f64,
    pub iv_far: f64,
    pub total_iv_rank: f64,
    pub buy_delta: f64,  // far-dated long leg, as quoted
    pub sell_delta: f64, // near-dated short leg, as quoted
    pub buy_theta: f64,
    pub sell_theta: f64,
    #[serde(default, rename = "sellDTE", alias = "sellDte")]
    pub sell_dte: Option<f64>,
    // Informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_near: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_far: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrikeGuide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_delta_range: Option<(f64, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_delta_range: Option<(f64, f64)>,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyResult {
    pub side: Side,
    pub name: StrategyName,
    pub score: i32,
    pub advice: Advice,
    pub net_delta: f64,
    pub net_theta: f64,
    pub iv_diff: f64,
    pub warnings: Vec<String>,
    pub adjustments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike_guide: Option<StrikeGuide>,
    pub explanation: String,
}
