pub mod finnhub;
pub mod ibkr;

use async_trait::async_trait;
use thiserror::Error;

use crate::strategies::FormInputs;

pub use finnhub::FinnhubProvider;
pub use ibkr::IbkrProvider;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0}")]
    NotImplemented(String),
}

/// Source of option-chain readings for the form. The evaluator never calls
/// providers; they only feed `FormInputs`.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Short identifier used in routes and responses.
    fn name(&self) -> &'static str;

    /// Fetch a snapshot for `symbol`.
    async fn fetch_snapshot(&self, symbol: &str) -> Result<FormInputs, ProviderError>;
}
