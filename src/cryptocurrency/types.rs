//! Payload types for the `cryptocurrency/*` endpoint family.
//!
//! Fields follow the wire schema; anything the API documents as nullable or
//! plan-gated is an `Option`. Monetary values arrive as JSON floats.

use serde::Deserialize;
use std::collections::HashMap;

/// Parent platform for tokens (e.g. the chain an ERC-20 lives on).
#[derive(Debug, Clone, Deserialize)]
pub struct Platform {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    pub token_address: Option<String>,
}

/// One row of the CoinMarketCap ID map.
#[derive(Debug, Clone, Deserialize)]
pub struct IdMapping {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    pub rank: Option<i64>,
    pub is_active: Option<i64>,
    pub first_historical_data: Option<String>,
    pub last_historical_data: Option<String>,
    pub platform: Option<Platform>,
}

/// Static metadata for one cryptocurrency.
#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub subreddit: Option<String>,
    pub notice: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(rename = "tag-names")]
    pub tag_names: Option<Vec<String>>,
    #[serde(rename = "tag-groups")]
    pub tag_groups: Option<Vec<String>>,
    pub urls: Option<MetadataUrls>,
    pub platform: Option<Platform>,
    pub date_added: Option<String>,
    pub twitter_username: Option<String>,
    pub is_hidden: Option<i64>,
}

/// Resource links attached to metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataUrls {
    #[serde(default)]
    pub website: Vec<String>,
    #[serde(default)]
    pub twitter: Vec<String>,
    #[serde(default)]
    pub message_board: Vec<String>,
    #[serde(default)]
    pub chat: Vec<String>,
    #[serde(default)]
    pub facebook: Vec<String>,
    #[serde(default)]
    pub explorer: Vec<String>,
    #[serde(default)]
    pub reddit: Vec<String>,
    #[serde(default)]
    pub technical_doc: Vec<String>,
    #[serde(default)]
    pub source_code: Vec<String>,
    #[serde(default)]
    pub announcement: Vec<String>,
}

/// Market quote in one conversion currency.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    pub price: Option<f64>,
    pub volume_24h: Option<f64>,
    pub volume_change_24h: Option<f64>,
    pub volume_24h_reported: Option<f64>,
    pub volume_7d: Option<f64>,
    pub volume_30d: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_dominance: Option<f64>,
    pub fully_diluted_market_cap: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub percent_change_7d: Option<f64>,
    pub percent_change_30d: Option<f64>,
    pub last_updated: Option<String>,
}

/// One cryptocurrency with market data, as returned by listings and quotes.
#[derive(Debug, Clone, Deserialize)]
pub struct Cryptocurrency {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    pub num_market_pairs: Option<i64>,
    pub date_added: Option<String>,
    pub tags: Option<Vec<String>>,
    pub max_supply: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub is_active: Option<i64>,
    pub is_fiat: Option<i64>,
    pub cmc_rank: Option<i64>,
    pub platform: Option<Platform>,
    pub last_updated: Option<String>,
    /// Keyed by conversion currency, e.g. "USD".
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

/// Interval series of historic quotes for one cryptocurrency.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalData {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    #[serde(default)]
    pub quotes: Vec<HistoricalQuote>,
}

/// One sampled point of a historic quote series.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalQuote {
    pub timestamp: String,
    pub search_interval: Option<String>,
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

/// Active market pairs for one cryptocurrency.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketPairs {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub num_market_pairs: Option<i64>,
    #[serde(default)]
    pub market_pairs: Vec<MarketPair>,
}

/// One exchange listing of a base/quote pair.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketPair {
    pub exchange: PairExchange,
    pub market_id: Option<i64>,
    pub market_pair: Option<String>,
    pub category: Option<String>,
    pub fee_type: Option<String>,
    pub market_pair_base: Option<PairCurrency>,
    pub market_pair_quote: Option<PairCurrency>,
    #[serde(default)]
    pub quote: HashMap<String, MarketPairQuote>,
}

/// The exchange hosting a market pair.
#[derive(Debug, Clone, Deserialize)]
pub struct PairExchange {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// One side of a market pair.
#[derive(Debug, Clone, Deserialize)]
pub struct PairCurrency {
    pub currency_id: Option<i64>,
    pub currency_symbol: Option<String>,
    pub currency_type: Option<String>,
    pub exchange_symbol: Option<String>,
}

/// Pair quote in one conversion currency (or as the exchange reported it).
#[derive(Debug, Clone, Deserialize)]
pub struct MarketPairQuote {
    pub price: Option<f64>,
    pub volume_24h_base: Option<f64>,
    pub volume_24h_quote: Option<f64>,
    pub volume_24h: Option<f64>,
    pub last_updated: Option<String>,
}

/// Open/high/low/close values in one conversion currency.
#[derive(Debug, Clone, Deserialize)]
pub struct Ohlcv {
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub last_updated: Option<String>,
    pub timestamp: Option<String>,
}

/// Latest OHLCV values for one cryptocurrency.
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcvLatest {
    pub id: i64,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub last_updated: Option<String>,
    pub time_open: Option<String>,
    pub time_close: Option<String>,
    pub time_high: Option<String>,
    pub time_low: Option<String>,
    #[serde(default)]
    pub quote: HashMap<String, Ohlcv>,
}

/// Historic OHLCV series for one cryptocurrency.
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcvHistorical {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    #[serde(default)]
    pub quotes: Vec<OhlcvPeriod>,
}

/// One period of a historic OHLCV series.
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcvPeriod {
    pub time_open: Option<String>,
    pub time_close: Option<String>,
    pub time_high: Option<String>,
    pub time_low: Option<String>,
    #[serde(default)]
    pub quote: HashMap<String, Ohlcv>,
}

/// Price performance statistics for one cryptocurrency.
#[derive(Debug, Clone, Deserialize)]
pub struct PricePerformance {
    pub id: i64,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub slug: Option<String>,
    pub last_updated: Option<String>,
    /// Keyed by requested time period, e.g. "all" or "24h".
    #[serde(default)]
    pub periods: HashMap<String, PerformancePeriod>,
}

/// Stats for one time period.
#[derive(Debug, Clone, Deserialize)]
pub struct PerformancePeriod {
    pub open_timestamp: Option<String>,
    pub high_timestamp: Option<String>,
    pub low_timestamp: Option<String>,
    pub close_timestamp: Option<String>,
    #[serde(default)]
    pub quote: HashMap<String, PerformanceQuote>,
}

/// Performance values in one conversion currency.
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceQuote {
    pub open: Option<f64>,
    pub open_timestamp: Option<String>,
    pub high: Option<f64>,
    pub high_timestamp: Option<String>,
    pub low: Option<f64>,
    pub low_timestamp: Option<String>,
    pub close: Option<f64>,
    pub close_timestamp: Option<String>,
    pub percent_change: Option<f64>,
    pub price_change: Option<f64>,
    pub last_updated: Option<String>,
}
