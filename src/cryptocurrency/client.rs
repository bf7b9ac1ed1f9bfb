//! Typed endpoint methods for the `cryptocurrency/*` API family.
//!
//! Every method follows one recipe: validate arguments, build a
//! [`QueryParams`] bag, delegate to the transport kernel. The original API
//! exposes each lookup endpoint as a family of by-id/by-slug/by-symbol
//! variants; here those collapse into one method per endpoint plus an
//! options struct with identifier constructors.

use crate::core::errors::CmcError;
use crate::core::kernel::{QueryParams, RestClient};
use crate::core::types::{ApiResponse, ListResponse, MapResponse};
use crate::cryptocurrency::params::{
    CryptocurrencyType, ListingsHistoricalSort, ListingsLatestSort, MapSort, MarketPairsSort,
    OhlcvInterval, OhlcvTimePeriod, PerformanceTimePeriod, QuoteInterval, SortDirection,
};
use crate::cryptocurrency::types::{
    Cryptocurrency, HistoricalData, IdMapping, MarketPairs, Metadata, OhlcvHistorical,
    OhlcvLatest, PricePerformance,
};
use chrono::NaiveDate;
use tracing::instrument;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Options for [`CryptocurrencyClient::map`].
#[derive(Debug, Clone, Default)]
pub struct MapOptions {
    /// "active" (default), "inactive", or "untracked"; comma-separated
    /// combinations are accepted.
    pub listing_status: Option<String>,
    pub start: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<MapSort>,
    pub symbol: Option<String>,
    pub aux: Option<String>,
}

/// Options for [`CryptocurrencyClient::metadata`]. At least one identifier
/// is required.
#[derive(Debug, Clone, Default)]
pub struct MetadataOptions {
    /// One or more comma-separated CoinMarketCap IDs, e.g. "1,2".
    pub id: Option<String>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
    pub aux: Option<String>,
}

impl MetadataOptions {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn by_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn by_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }
}

/// Options for [`CryptocurrencyClient::listings_latest`].
#[derive(Debug, Clone, Default)]
pub struct ListingsLatestOptions {
    pub start: Option<u32>,
    pub limit: Option<u32>,
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
    pub market_cap_min: Option<u64>,
    pub market_cap_max: Option<u64>,
    pub volume_24h_min: Option<u64>,
    pub volume_24h_max: Option<u64>,
    pub circulating_supply_min: Option<u64>,
    pub circulating_supply_max: Option<u64>,
    pub percent_change_24h_min: Option<f64>,
    pub percent_change_24h_max: Option<f64>,
    /// Comma-separated conversion symbols, e.g. "USD,EUR".
    pub convert: Option<String>,
    /// Conversion by CoinMarketCap ID; mutually exclusive with `convert`.
    pub convert_id: Option<String>,
    pub sort: Option<ListingsLatestSort>,
    pub sort_dir: Option<SortDirection>,
    pub cryptocurrency_type: Option<CryptocurrencyType>,
    pub aux: Option<String>,
}

/// Options for [`CryptocurrencyClient::listings_historical`].
#[derive(Debug, Clone, Default)]
pub struct ListingsHistoricalOptions {
    pub start: Option<u32>,
    pub limit: Option<u32>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
    pub sort: Option<ListingsHistoricalSort>,
    pub sort_dir: Option<SortDirection>,
    pub cryptocurrency_type: Option<CryptocurrencyType>,
    pub aux: Option<String>,
}

/// Options for [`CryptocurrencyClient::quotes_latest`]. At least one
/// identifier is required.
#[derive(Debug, Clone, Default)]
pub struct QuotesLatestOptions {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
    pub aux: Option<String>,
    /// Skip identifiers the API cannot resolve instead of erroring the
    /// whole call. Only serialized when true.
    pub skip_invalid: bool,
}

impl QuotesLatestOptions {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn by_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn by_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }
}

/// Options for [`CryptocurrencyClient::quotes_historical`]. Requires an id
/// or a symbol.
#[derive(Debug, Clone, Default)]
pub struct QuotesHistoricalOptions {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub time_start: Option<NaiveDate>,
    pub time_end: Option<NaiveDate>,
    /// Number of interval periods; the API defaults to 10.
    pub count: Option<u32>,
    pub interval: Option<QuoteInterval>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
    pub aux: Option<String>,
}

impl QuotesHistoricalOptions {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn by_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }
}

/// Options for [`CryptocurrencyClient::market_pairs_latest`]. At least one
/// identifier is required.
#[derive(Debug, Clone, Default)]
pub struct MarketPairsOptions {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
    pub start: Option<u32>,
    pub limit: Option<u32>,
    pub sort_dir: Option<SortDirection>,
    pub sort: Option<MarketPairsSort>,
    pub aux: Option<String>,
    pub matched_id: Option<String>,
    pub matched_symbol: Option<String>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
}

impl MarketPairsOptions {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn by_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn by_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }
}

/// Options for [`CryptocurrencyClient::ohlcv_latest`]. Requires an id or a
/// symbol.
#[derive(Debug, Clone, Default)]
pub struct OhlcvLatestOptions {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
    pub skip_invalid: bool,
}

impl OhlcvLatestOptions {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn by_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }
}

/// Options for [`CryptocurrencyClient::ohlcv_historical`]. At least one
/// identifier is required.
#[derive(Debug, Clone, Default)]
pub struct OhlcvHistoricalOptions {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
    pub time_period: Option<OhlcvTimePeriod>,
    pub time_start: Option<NaiveDate>,
    pub time_end: Option<NaiveDate>,
    pub count: Option<u32>,
    pub interval: Option<OhlcvInterval>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
    pub skip_invalid: bool,
}

impl OhlcvHistoricalOptions {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn by_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn by_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }
}

/// Options for [`CryptocurrencyClient::price_performance_stats_latest`].
/// At least one identifier is required.
#[derive(Debug, Clone, Default)]
pub struct PricePerformanceOptions {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
    pub time_period: Option<PerformanceTimePeriod>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
}

impl PricePerformanceOptions {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn by_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn by_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }
}

/// Thin typed wrapper around [`RestClient`] for the cryptocurrency endpoints.
pub struct CryptocurrencyClient<R: RestClient> {
    rest: R,
}

impl<R: RestClient> CryptocurrencyClient<R> {
    pub fn new(rest: R) -> Self {
        Self { rest }
    }

    /// Access the underlying transport.
    pub fn rest(&self) -> &R {
        &self.rest
    }

    /// Map of all cryptocurrencies to unique CoinMarketCap IDs.
    #[instrument(skip(self, options))]
    pub async fn map(
        &self,
        options: &MapOptions,
    ) -> Result<Option<ListResponse<IdMapping>>, CmcError> {
        check_start(options.start)?;
        check_limit(options.limit)?;

        let params = QueryParams::new()
            .set("listing_status", options.listing_status.clone())
            .set("start", options.start.map(|v| v.to_string()))
            .set("limit", options.limit.map(|v| v.to_string()))
            .set("sort", options.sort.map(MapSort::as_str))
            .set("symbol", options.symbol.clone())
            .set("aux", options.aux.clone());

        self.rest.get_json("cryptocurrency/map", &params).await
    }

    /// Static metadata (logo, description, links) for one or more
    /// cryptocurrencies, keyed by the identifier used in the request.
    #[instrument(skip(self, options))]
    pub async fn metadata(
        &self,
        options: &MetadataOptions,
    ) -> Result<Option<MapResponse<Metadata>>, CmcError> {
        require_identifier(&[
            ("id", options.id.as_deref()),
            ("slug", options.slug.as_deref()),
            ("symbol", options.symbol.as_deref()),
        ])?;

        let params = QueryParams::new()
            .set("id", options.id.clone())
            .set("slug", options.slug.clone())
            .set("symbol", options.symbol.clone())
            .set("aux", options.aux.clone());

        self.rest.get_json("cryptocurrency/info", &params).await
    }

    /// Paginated list of all active cryptocurrencies with latest market
    /// data.
    #[instrument(skip(self, options))]
    pub async fn listings_latest(
        &self,
        options: &ListingsLatestOptions,
    ) -> Result<Option<ListResponse<Cryptocurrency>>, CmcError> {
        check_start(options.start)?;
        check_limit(options.limit)?;

        let params = QueryParams::new()
            .set("start", options.start.map(|v| v.to_string()))
            .set("limit", options.limit.map(|v| v.to_string()))
            .set("price_min", options.price_min.map(|v| v.to_string()))
            .set("price_max", options.price_max.map(|v| v.to_string()))
            .set("market_cap_min", options.market_cap_min.map(|v| v.to_string()))
            .set("market_cap_max", options.market_cap_max.map(|v| v.to_string()))
            .set("volume_24h_min", options.volume_24h_min.map(|v| v.to_string()))
            .set("volume_24h_max", options.volume_24h_max.map(|v| v.to_string()))
            .set(
                "circulating_supply_min",
                options.circulating_supply_min.map(|v| v.to_string()),
            )
            .set(
                "circulating_supply_max",
                options.circulating_supply_max.map(|v| v.to_string()),
            )
            .set(
                "percent_change_24h_min",
                options.percent_change_24h_min.map(|v| v.to_string()),
            )
            .set(
                "percent_change_24h_max",
                options.percent_change_24h_max.map(|v| v.to_string()),
            )
            .set("convert", options.convert.clone())
            .set("convert_id", options.convert_id.clone())
            .set("sort", options.sort.map(ListingsLatestSort::as_str))
            .set("sort_dir", options.sort_dir.map(SortDirection::as_str))
            .set(
                "cryptocurrency_type",
                options.cryptocurrency_type.map(CryptocurrencyType::as_str),
            )
            .set("aux", options.aux.clone());

        self.rest
            .get_json("cryptocurrency/listings/latest", &params)
            .await
    }

    /// Ranked and sorted list of all cryptocurrencies for a historical UTC
    /// date.
    #[instrument(skip(self, options))]
    pub async fn listings_historical(
        &self,
        date: NaiveDate,
        options: &ListingsHistoricalOptions,
    ) -> Result<Option<ListResponse<Cryptocurrency>>, CmcError> {
        check_start(options.start)?;
        check_limit(options.limit)?;

        let params = QueryParams::new()
            .set("date", Some(date.format(DATE_FORMAT).to_string()))
            .set("start", options.start.map(|v| v.to_string()))
            .set("limit", options.limit.map(|v| v.to_string()))
            .set("convert", options.convert.clone())
            .set("convert_id", options.convert_id.clone())
            .set("sort", options.sort.map(ListingsHistoricalSort::as_str))
            .set("sort_dir", options.sort_dir.map(SortDirection::as_str))
            .set(
                "cryptocurrency_type",
                options.cryptocurrency_type.map(CryptocurrencyType::as_str),
            )
            .set("aux", options.aux.clone());

        self.rest
            .get_json("cryptocurrency/listings/historical", &params)
            .await
    }

    /// Latest market quote for one or more cryptocurrencies, keyed by the
    /// identifier used in the request.
    #[instrument(skip(self, options))]
    pub async fn quotes_latest(
        &self,
        options: &QuotesLatestOptions,
    ) -> Result<Option<MapResponse<Cryptocurrency>>, CmcError> {
        require_identifier(&[
            ("id", options.id.as_deref()),
            ("slug", options.slug.as_deref()),
            ("symbol", options.symbol.as_deref()),
        ])?;

        let params = QueryParams::new()
            .set("id", options.id.clone())
            .set("slug", options.slug.clone())
            .set("symbol", options.symbol.clone())
            .set("convert", options.convert.clone())
            .set("convert_id", options.convert_id.clone())
            .set("aux", options.aux.clone())
            .set("skip_invalid", options.skip_invalid.then_some("true"));

        self.rest
            .get_json("cryptocurrency/quotes/latest", &params)
            .await
    }

    /// Interval of historic market quotes based on time and interval
    /// parameters.
    #[instrument(skip(self, options))]
    pub async fn quotes_historical(
        &self,
        options: &QuotesHistoricalOptions,
    ) -> Result<Option<ApiResponse<HistoricalData>>, CmcError> {
        require_identifier(&[
            ("id", options.id.as_deref()),
            ("symbol", options.symbol.as_deref()),
        ])?;

        let params = QueryParams::new()
            .set("id", options.id.clone())
            .set("symbol", options.symbol.clone())
            .set(
                "time_start",
                options.time_start.map(|d| d.format(DATE_FORMAT).to_string()),
            )
            .set(
                "time_end",
                options.time_end.map(|d| d.format(DATE_FORMAT).to_string()),
            )
            .set("count", options.count.map(|v| v.to_string()))
            .set("interval", options.interval.map(QuoteInterval::as_str))
            .set("convert", options.convert.clone())
            .set("convert_id", options.convert_id.clone())
            .set("aux", options.aux.clone());

        self.rest
            .get_json("cryptocurrency/quotes/historical", &params)
            .await
    }

    /// Active market pairs for a cryptocurrency, with exchange-level quotes.
    #[instrument(skip(self, options))]
    pub async fn market_pairs_latest(
        &self,
        options: &MarketPairsOptions,
    ) -> Result<Option<ApiResponse<MarketPairs>>, CmcError> {
        require_identifier(&[
            ("id", options.id.as_deref()),
            ("slug", options.slug.as_deref()),
            ("symbol", options.symbol.as_deref()),
        ])?;
        check_start(options.start)?;
        check_limit(options.limit)?;

        let params = QueryParams::new()
            .set("id", options.id.clone())
            .set("slug", options.slug.clone())
            .set("symbol", options.symbol.clone())
            .set("start", options.start.map(|v| v.to_string()))
            .set("limit", options.limit.map(|v| v.to_string()))
            .set("sort_dir", options.sort_dir.map(SortDirection::as_str))
            .set("sort", options.sort.map(MarketPairsSort::as_str))
            .set("aux", options.aux.clone())
            .set("matched_id", options.matched_id.clone())
            .set("matched_symbol", options.matched_symbol.clone())
            .set("convert", options.convert.clone())
            .set("convert_id", options.convert_id.clone());

        self.rest
            .get_json("cryptocurrency/market-pairs/latest", &params)
            .await
    }

    /// Latest OHLCV values, keyed by the identifier used in the request.
    #[instrument(skip(self, options))]
    pub async fn ohlcv_latest(
        &self,
        options: &OhlcvLatestOptions,
    ) -> Result<Option<MapResponse<OhlcvLatest>>, CmcError> {
        require_identifier(&[
            ("id", options.id.as_deref()),
            ("symbol", options.symbol.as_deref()),
        ])?;

        let params = QueryParams::new()
            .set("id", options.id.clone())
            .set("symbol", options.symbol.clone())
            .set("convert", options.convert.clone())
            .set("convert_id", options.convert_id.clone())
            .set("skip_invalid", options.skip_invalid.then_some("true"));

        self.rest
            .get_json("cryptocurrency/ohlcv/latest", &params)
            .await
    }

    /// Historic OHLCV series based on time and interval parameters.
    #[instrument(skip(self, options))]
    pub async fn ohlcv_historical(
        &self,
        options: &OhlcvHistoricalOptions,
    ) -> Result<Option<ApiResponse<OhlcvHistorical>>, CmcError> {
        require_identifier(&[
            ("id", options.id.as_deref()),
            ("slug", options.slug.as_deref()),
            ("symbol", options.symbol.as_deref()),
        ])?;

        let params = QueryParams::new()
            .set("id", options.id.clone())
            .set("slug", options.slug.clone())
            .set("symbol", options.symbol.clone())
            .set("time_period", options.time_period.map(OhlcvTimePeriod::as_str))
            .set(
                "time_start",
                options.time_start.map(|d| d.format(DATE_FORMAT).to_string()),
            )
            .set(
                "time_end",
                options.time_end.map(|d| d.format(DATE_FORMAT).to_string()),
            )
            .set("count", options.count.map(|v| v.to_string()))
            .set("interval", options.interval.map(OhlcvInterval::as_str))
            .set("convert", options.convert.clone())
            .set("convert_id", options.convert_id.clone())
            .set("skip_invalid", options.skip_invalid.then_some("true"));

        self.rest
            .get_json("cryptocurrency/ohlcv/historical", &params)
            .await
    }

    /// Launch-to-date and windowed price performance statistics, keyed by
    /// the identifier used in the request.
    #[instrument(skip(self, options))]
    pub async fn price_performance_stats_latest(
        &self,
        options: &PricePerformanceOptions,
    ) -> Result<Option<MapResponse<PricePerformance>>, CmcError> {
        require_identifier(&[
            ("id", options.id.as_deref()),
            ("slug", options.slug.as_deref()),
            ("symbol", options.symbol.as_deref()),
        ])?;

        let params = QueryParams::new()
            .set("id", options.id.clone())
            .set("slug", options.slug.clone())
            .set("symbol", options.symbol.clone())
            .set(
                "time_period",
                options.time_period.map(PerformanceTimePeriod::as_str),
            )
            .set("convert", options.convert.clone())
            .set("convert_id", options.convert_id.clone());

        self.rest
            .get_json("cryptocurrency/price-performance-stats/latest", &params)
            .await
    }
}

/// Enforce that at least one member of an identifier alternative set is
/// present and non-blank, before any request is built.
fn require_identifier(alternatives: &[(&str, Option<&str>)]) -> Result<(), CmcError> {
    let supplied = alternatives
        .iter()
        .any(|(_, value)| value.map_or(false, |v| !v.trim().is_empty()));

    if supplied {
        Ok(())
    } else {
        let names = alternatives
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");
        Err(CmcError::InvalidParameters(format!(
            "must specify one of: {}",
            names
        )))
    }
}

fn check_start(start: Option<u32>) -> Result<(), CmcError> {
    match start {
        Some(value) if value < 1 => Err(CmcError::OutOfRange {
            param: "start",
            value: i64::from(value),
            valid: ">= 1",
        }),
        _ => Ok(()),
    }
}

fn check_limit(limit: Option<u32>) -> Result<(), CmcError> {
    match limit {
        Some(value) if !(1..=5000).contains(&value) => Err(CmcError::OutOfRange {
            param: "limit",
            value: i64::from(value),
            valid: "1..=5000",
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernel::{encode_url, rest::decode_body};
    use async_trait::async_trait;
    use serde::de::DeserializeOwned;
    use std::sync::Mutex;

    const EMPTY_LIST_ENVELOPE: &str = r#"{
        "status": {"timestamp": null, "error_code": 0, "error_message": null,
                   "elapsed": 1, "credit_count": 1},
        "data": []
    }"#;

    const EMPTY_MAP_ENVELOPE: &str = r#"{
        "status": {"timestamp": null, "error_code": 0, "error_message": null,
                   "elapsed": 1, "credit_count": 1},
        "data": {}
    }"#;

    /// Stub transport that records every encoded request instead of
    /// performing I/O.
    struct RecordingRest {
        body: &'static str,
        requests: Mutex<Vec<String>>,
    }

    impl RecordingRest {
        fn with_body(body: &'static str) -> Self {
            Self {
                body,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RestClient for RecordingRest {
        async fn get_json<T: DeserializeOwned>(
            &self,
            endpoint: &str,
            params: &QueryParams,
        ) -> Result<Option<T>, CmcError> {
            let url = encode_url("https://pro-api.coinmarketcap.com/v1/", endpoint, params);
            self.requests.lock().unwrap().push(url);
            decode_body(self.body)
        }
    }

    fn map_client(body: &'static str) -> CryptocurrencyClient<RecordingRest> {
        CryptocurrencyClient::new(RecordingRest::with_body(body))
    }

    #[tokio::test]
    async fn metadata_without_identifier_is_rejected_before_any_request() {
        let client = map_client(EMPTY_MAP_ENVELOPE);
        let result = client.metadata(&MetadataOptions::default()).await;

        assert!(matches!(result, Err(CmcError::InvalidParameters(_))));
        assert!(client.rest().requests().is_empty());
    }

    #[tokio::test]
    async fn metadata_with_blank_identifiers_is_rejected() {
        let client = map_client(EMPTY_MAP_ENVELOPE);
        let options = MetadataOptions {
            id: Some("   ".to_string()),
            slug: Some(String::new()),
            symbol: None,
            aux: None,
        };

        let result = client.metadata(&options).await;
        assert!(matches!(result, Err(CmcError::InvalidParameters(_))));
        assert!(client.rest().requests().is_empty());
    }

    #[tokio::test]
    async fn metadata_with_one_identifier_builds_a_request() {
        let client = map_client(EMPTY_MAP_ENVELOPE);
        let response = client
            .metadata(&MetadataOptions::by_slug("bitcoin"))
            .await
            .unwrap();

        assert!(response.is_some());
        assert_eq!(
            client.rest().requests(),
            vec!["https://pro-api.coinmarketcap.com/v1/cryptocurrency/info?slug=bitcoin"]
        );
    }

    #[tokio::test]
    async fn quotes_latest_encodes_comma_lists_and_drops_blanks() {
        let client = map_client(EMPTY_MAP_ENVELOPE);
        let options = QuotesLatestOptions {
            id: Some("1,2".to_string()),
            convert: Some(String::new()),
            ..QuotesLatestOptions::default()
        };

        client.quotes_latest(&options).await.unwrap();
        assert_eq!(
            client.rest().requests(),
            vec!["https://pro-api.coinmarketcap.com/v1/cryptocurrency/quotes/latest?id=1%2C2"]
        );
    }

    #[tokio::test]
    async fn skip_invalid_is_only_sent_when_true() {
        let client = map_client(EMPTY_MAP_ENVELOPE);

        let mut options = QuotesLatestOptions::by_symbol("BTC");
        client.quotes_latest(&options).await.unwrap();

        options.skip_invalid = true;
        client.quotes_latest(&options).await.unwrap();

        let requests = client.rest().requests();
        assert!(!requests[0].contains("skip_invalid"));
        assert!(requests[1].ends_with("symbol=BTC&skip_invalid=true"));
    }

    #[tokio::test]
    async fn map_start_zero_is_out_of_range() {
        let client = map_client(EMPTY_LIST_ENVELOPE);
        let options = MapOptions {
            start: Some(0),
            ..MapOptions::default()
        };

        let result = client.map(&options).await;
        assert!(matches!(
            result,
            Err(CmcError::OutOfRange { param: "start", value: 0, .. })
        ));
        assert!(client.rest().requests().is_empty());
    }

    #[tokio::test]
    async fn map_start_one_is_accepted() {
        let client = map_client(EMPTY_LIST_ENVELOPE);
        let options = MapOptions {
            start: Some(1),
            ..MapOptions::default()
        };

        let response = client.map(&options).await.unwrap();
        assert!(response.is_some());
    }

    #[tokio::test]
    async fn listings_limit_bounds_are_inclusive() {
        let client = map_client(EMPTY_LIST_ENVELOPE);

        let over = ListingsLatestOptions {
            limit: Some(5001),
            ..ListingsLatestOptions::default()
        };
        let result = client.listings_latest(&over).await;
        assert!(matches!(
            result,
            Err(CmcError::OutOfRange { param: "limit", value: 5001, .. })
        ));
        assert!(client.rest().requests().is_empty());

        let at_bound = ListingsLatestOptions {
            limit: Some(5000),
            ..ListingsLatestOptions::default()
        };
        client.listings_latest(&at_bound).await.unwrap();
        assert_eq!(client.rest().requests().len(), 1);
    }

    #[tokio::test]
    async fn listings_latest_preserves_parameter_order() {
        let client = map_client(EMPTY_LIST_ENVELOPE);
        let options = ListingsLatestOptions {
            start: Some(1),
            limit: Some(100),
            sort: Some(ListingsLatestSort::MarketCap),
            sort_dir: Some(SortDirection::Descending),
            cryptocurrency_type: Some(CryptocurrencyType::Coins),
            ..ListingsLatestOptions::default()
        };

        client.listings_latest(&options).await.unwrap();
        assert_eq!(
            client.rest().requests(),
            vec![
                "https://pro-api.coinmarketcap.com/v1/cryptocurrency/listings/latest\
                 ?start=1&limit=100&sort=market_cap&sort_dir=desc&cryptocurrency_type=coins"
            ]
        );
    }

    #[tokio::test]
    async fn listings_historical_formats_the_snapshot_date() {
        let client = map_client(EMPTY_LIST_ENVELOPE);
        let date = NaiveDate::from_ymd_opt(2021, 4, 19).unwrap();

        client
            .listings_historical(date, &ListingsHistoricalOptions::default())
            .await
            .unwrap();

        assert_eq!(
            client.rest().requests(),
            vec!["https://pro-api.coinmarketcap.com/v1/cryptocurrency/listings/historical?date=2021-04-19"]
        );
    }

    #[tokio::test]
    async fn quotes_historical_requires_id_or_symbol() {
        let client = map_client(EMPTY_MAP_ENVELOPE);
        let result = client
            .quotes_historical(&QuotesHistoricalOptions::default())
            .await;

        match result {
            Err(CmcError::InvalidParameters(message)) => {
                assert!(message.contains("id"));
                assert!(message.contains("symbol"));
                assert!(!message.contains("slug"));
            }
            other => panic!("expected InvalidParameters, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn ohlcv_historical_formats_window_and_interval() {
        let client = map_client(EMPTY_MAP_ENVELOPE);
        let options = OhlcvHistoricalOptions {
            time_period: Some(OhlcvTimePeriod::Daily),
            time_start: Some(NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()),
            time_end: Some(NaiveDate::from_ymd_opt(2019, 2, 1).unwrap()),
            interval: Some(OhlcvInterval::Days1),
            ..OhlcvHistoricalOptions::by_id("1")
        };

        client.ohlcv_historical(&options).await.unwrap();
        assert_eq!(
            client.rest().requests(),
            vec![
                "https://pro-api.coinmarketcap.com/v1/cryptocurrency/ohlcv/historical\
                 ?id=1&time_period=daily&time_start=2019-01-01&time_end=2019-02-01&interval=1d"
            ]
        );
    }

    #[tokio::test]
    async fn price_performance_sends_the_period_wire_string() {
        let client = map_client(EMPTY_MAP_ENVELOPE);
        let options = PricePerformanceOptions {
            time_period: Some(PerformanceTimePeriod::YearToDate),
            ..PricePerformanceOptions::by_symbol("BTC")
        };

        client.price_performance_stats_latest(&options).await.unwrap();
        assert_eq!(
            client.rest().requests(),
            vec![
                "https://pro-api.coinmarketcap.com/v1/cryptocurrency/price-performance-stats/latest\
                 ?symbol=BTC&time_period=ytd"
            ]
        );
    }
}
