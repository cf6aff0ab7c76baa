use async_trait::async_trait;
use tracing::debug;

use super::{MarketDataProvider, ProviderError};
use crate::strategies::FormInputs;

/// Finnhub REST data. Reserved.
#[derive(Debug, Default, Clone, Copy)]
pub struct FinnhubProvider;

#[async_trait]
impl MarketDataProvider for FinnhubProvider {
    fn name(&self) -> &'static str {
        "finnhub"
    }

    async fn fetch_snapshot(&self, symbol: &str) -> Result<FormInputs, ProviderError> {
        debug!("Finnhub snapshot requested for {}", symbol);
        Err(ProviderError::NotImplemented(
            "Finnhub API not implemented yet".to_string(),
        ))
    }
}
