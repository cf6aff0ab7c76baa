//! Numeric coercion for loosely typed form values.
//!
//! Every numeric field goes through here. Anything that does not parse to a
//! finite number collapses to the caller's default, so evaluation never fails
//! on bad input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::strategies::types::{Inputs, Trend};
use crate::strategies::volatility::VolatilitySource;

/// Default for Delta, Theta and IV fields.
pub const DEFAULT_GREEK: f64 = 0.0;
/// Default for day counts: "not imminent / far away".
pub const FAR_AWAY_DAYS: f64 = 999.0;

/// Coerce an arbitrary JSON value to a finite number, or `default`.
pub fn normalize(value: &Value, default: f64) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().map_or(default, |v| finite_or(v, default)),
        Value::String(s) => parse_decimal(s).unwrap_or(default),
        _ => default,
    }
}

/// Same contract as [`normalize`] for values already typed as `f64`.
#[inline]
pub fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        default
    }
}

/// Like [`normalize`] but reports absence instead of substituting a default.
/// Blank strings count as absent (a cleared form field).
pub fn normalize_optional(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Rust accepts "inf" and "NaN"; those are rejected by the finiteness check.
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Inputs as the form posts them. Numbers may arrive as numbers, numeric
/// strings or `""` for a cleared field.
///
/// `iv_near`/`iv_far` are ranks or term-structure IVs depending on the
/// configured volatility source; `total_iv_rank` is only read for
/// [`VolatilitySource::TermStructure`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInputs {
    pub trend: Trend,
    #[serde(default)]
    pub earnings_days: Value,
    #[serde(default, alias = "ivNearRank")]
    pub iv_near: Value,
    #[serde(default, alias = "ivFarRank")]
    pub iv_far: Value,
    #[serde(default)]
    pub total_iv_rank: Value,
    #[serde(default)]
    pub buy_delta: Value,
    #[serde(default)]
    pub sell_delta: Value,
    #[serde(default)]
    pub buy_theta: Value,
    #[serde(default)]
    pub sell_theta: Value,
    #[serde(default, rename = "sellDTE", alias = "sellDte")]
    pub sell_dte: Value,
    #[serde(default)]
    pub price_near: Value,
    #[serde(default)]
    pub price_far: Value,
}

impl FormInputs {
    /// Resolve raw form values into canonical [`Inputs`].
    pub fn resolve(&self, source: VolatilitySource) -> Inputs {
        let iv_near = normalize(&self.iv_near, DEFAULT_GREEK);
        let iv_far = normalize(&self.iv_far, DEFAULT_GREEK);
        let total_iv_rank = normalize(&self.total_iv_rank, DEFAULT_GREEK);

        Inputs {
            trend: self.trend,
            earnings_days: normalize_optional(&self.earnings_days),
            iv_near,
            iv_far,
            total_iv_rank: source.gate_rank(iv_near, total_iv_rank),
            buy_delta: normalize(&self.buy_delta, DEFAULT_GREEK),
            sell_delta: normalize(&self.sell_delta, DEFAULT_GREEK),
            buy_theta: normalize(&self.buy_theta, DEFAULT_GREEK),
            sell_theta: normalize(&self.sell_theta, DEFAULT_GREEK),
            sell_dte: normalize_optional(&self.sell_dte),
            price_near: normalize_optional(&self.price_near),
            price_far: normalize_optional(&self.price_far),
        }
    }
}

impl From<&Inputs> for FormInputs {
    fn from(inputs: &Inputs) -> Self {
        let opt = |v: Option<f64>| v.map_or(Value::Null, Value::from);
        Self {
            trend: inputs.trend,
            earnings_days: opt(inputs.earnings_days),
            iv_near: Value::from(inputs.iv_near),
            iv_far: Value::from(inputs.iv_far),
            total_iv_rank: Value::from(inputs.total_iv_rank),
            buy_delta: Value::from(inputs.buy_delta),
            sell_delta: Value::from(inputs.sell_delta),
            buy_theta: Value::from(inputs.buy_theta),
            sell_theta: Value::from(inputs.sell_theta),
            sell_dte: opt(inputs.sell_dte),
            price_near: opt(inputs.price_near),
            price_far: opt(inputs.price_far),
        }
    }
}
