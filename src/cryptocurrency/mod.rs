pub mod client;
pub mod params;
pub mod types;

use crate::core::config::CmcConfig;
use crate::core::errors::CmcError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};

// Re-export main types for easier importing
pub use client::{
    CryptocurrencyClient, ListingsHistoricalOptions, ListingsLatestOptions, MapOptions,
    MarketPairsOptions, MetadataOptions, OhlcvHistoricalOptions, OhlcvLatestOptions,
    PricePerformanceOptions, QuotesHistoricalOptions, QuotesLatestOptions,
};
pub use params::{
    CryptocurrencyType, ListingsHistoricalSort, ListingsLatestSort, MapSort, MarketPairsSort,
    OhlcvInterval, OhlcvTimePeriod, PerformanceTimePeriod, QuoteInterval, SortDirection,
};
pub use types::{
    Cryptocurrency, HistoricalData, HistoricalQuote, IdMapping, MarketPair, MarketPairQuote,
    MarketPairs, Metadata, MetadataUrls, Ohlcv, OhlcvHistorical, OhlcvLatest, OhlcvPeriod,
    PairCurrency, PairExchange, PerformancePeriod, PerformanceQuote, Platform,
    PricePerformance, Quote,
};

/// Production API base URL
pub const API_BASE_URL: &str = "https://pro-api.coinmarketcap.com/v1/";

/// Sandbox API base URL
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.coinmarketcap.com/v1/";

/// Create a cryptocurrency client backed by the reqwest transport.
///
/// The base URL is chosen once here and stays fixed for the client's
/// lifetime: the sandbox flag selects the sandbox host, otherwise an
/// explicit override or the production host is used.
pub fn create_cryptocurrency_client(
    config: CmcConfig,
) -> Result<CryptocurrencyClient<ReqwestRest>, CmcError> {
    let rest_config = RestClientConfig::new(resolve_base_url(&config), "coinmarketcap".to_string());
    let rest = RestClientBuilder::new(rest_config)
        .with_api_key(config.api_key)
        .build()?;

    Ok(CryptocurrencyClient::new(rest))
}

fn resolve_base_url(config: &CmcConfig) -> String {
    if config.sandbox {
        SANDBOX_BASE_URL.to_string()
    } else {
        config
            .base_url
            .clone()
            .unwrap_or_else(|| API_BASE_URL.to_string())
    }
}
