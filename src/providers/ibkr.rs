use async_trait::async_trait;
use tracing::debug;

use super::{MarketDataProvider, ProviderError};
use crate::strategies::FormInputs;

/// Interactive Brokers gateway. Reserved.
#[derive(Debug, Default, Clone, Copy)]
pub struct IbkrProvider;

#[async_trait]
impl MarketDataProvider for IbkrProvider {
    fn name(&self) -> &'static str {
        "ibkr"
    }

    async fn fetch_snapshot(&self, symbol: &str) -> Result<FormInputs, ProviderError> {
        debug!("IBKR snapshot requested for {}", symbol);
        Err(ProviderError::NotImplemented(
            "IBKR API not implemented yet".to_string(),
        ))
    }
}
