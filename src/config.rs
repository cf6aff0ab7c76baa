use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{AdvisorError, Result};
use crate::strategies::volatility::VolatilitySource;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub advisor: AdvisorConfig,
    pub volatility_source: VolatilitySource,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

/// Thresholds used by the scorer and advisor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct AdvisorConfig {
    pub open_score_threshold: i32,
    pub small_score_threshold: i32,
    // Earnings penalty fires when earnings are within this many days...
    pub earnings_window_days: f64,
    // ...and the gate rank is strictly above this.
    pub earnings_iv_rank_gate: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            open_score_threshold: 80,
            small_score_threshold: 60,
            earnings_window_days: 5.0,
            earnings_iv_rank_gate: 70.0,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3002".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = AdvisorConfig::default();

        let server = ServerConfig {
            bind_addr: env::var("ADVISOR_BIND_ADDR")
                .unwrap_or_else(|_| ServerConfig::default().bind_addr),
        };

        let advisor = AdvisorConfig {
            open_score_threshold: env::var("OPEN_SCORE_THRESHOLD")
                .unwrap_or_else(|_| "80".to_string())
                .parse()
                .unwrap_or(defaults.open_score_threshold),
            small_score_threshold: env::var("SMALL_SCORE_THRESHOLD")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap_or(defaults.small_score_threshold),
            earnings_window_days: env::var("EARNINGS_WINDOW_DAYS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(defaults.earnings_window_days),
            earnings_iv_rank_gate: env::var("EARNINGS_IV_RANK_GATE")
                .unwrap_or_else(|_| "70".to_string())
                .parse()
                .unwrap_or(defaults.earnings_iv_rank_gate),
        };

        let volatility_source = env::var("VOLATILITY_SOURCE")
            .unwrap_or_else(|_| "rank_pair".to_string())
            .parse()?;

        let config = Config {
            server,
            advisor,
            volatility_source,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject threshold combinations that would make the advice bands overlap.
    pub fn validate(&self) -> Result<()> {
        if self.advisor.small_score_threshold > self.advisor.open_score_threshold {
            return Err(AdvisorError::Config(format!(
                "SMALL_SCORE_THRESHOLD ({}) must not exceed OPEN_SCORE_THRESHOLD ({})",
                self.advisor.small_score_threshold, self.advisor.open_score_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let cfg = AdvisorConfig::default();
        assert_eq!(cfg.open_score_threshold, 80);
        assert_eq!(cfg.small_score_threshold, 60);
        assert_eq!(cfg.earnings_window_days, 5.0);
        assert_eq!(cfg.earnings_iv_rank_gate, 70.0);
    }

    fn config(open: i32, small: i32) -> Config {
        Config {
            server: ServerConfig::default(),
            advisor: AdvisorConfig {
                open_score_threshold: open,
                small_score_threshold: small,
                ..AdvisorConfig::default()
            },
            volatility_source: VolatilitySource::RankPair,
        }
    }

    #[test]
    fn test_validate_threshold_order() {
        assert!(config(80, 60).validate().is_ok());
        assert!(config(70, 70).validate().is_ok());

        let err = config(60, 80).validate().unwrap_err();
        assert!(matches!(err, AdvisorError::Config(_)));
        assert!(err.to_string().contains("SMALL_SCORE_THRESHOLD (80)"));
    }

    #[test]
    fn test_unknown_volatility_source_is_config_error() {
        let err = "vol_surface".parse::<VolatilitySource>().unwrap_err();
        assert!(matches!(err, AdvisorError::Config(_)));
        assert_eq!(err.to_string(), "config error: unknown volatility source 'vol_surface'");
    }
}
