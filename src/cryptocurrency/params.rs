//! Wire-string tables for the enumerated query parameters.
//!
//! Each enum maps a symbolic variant to the literal the API expects; the
//! encoder never sees the variants themselves.

/// Direction applied to a sortable endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// The type of cryptocurrency to include in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptocurrencyType {
    All,
    Coins,
    Tokens,
}

impl CryptocurrencyType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Coins => "coins",
            Self::Tokens => "tokens",
        }
    }
}

/// Sort field for the ID map endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapSort {
    Id,
    CmcRank,
}

impl MapSort {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::CmcRank => "cmc_rank",
        }
    }
}

/// Sort field for the latest listings endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingsLatestSort {
    Name,
    Symbol,
    DateAdded,
    MarketCap,
    MarketCapStrict,
    Price,
    CirculatingSupply,
    TotalSupply,
    MaxSupply,
    NumMarketPairs,
    Volume24h,
    PercentChange1h,
    PercentChange24h,
    PercentChange7d,
    MarketCapByTotalSupplyStrict,
    Volume7d,
    Volume30d,
}

impl ListingsLatestSort {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Symbol => "symbol",
            Self::DateAdded => "date_added",
            Self::MarketCap => "market_cap",
            Self::MarketCapStrict => "market_cap_strict",
            Self::Price => "price",
            Self::CirculatingSupply => "circulating_supply",
            Self::TotalSupply => "total_supply",
            Self::MaxSupply => "max_supply",
            Self::NumMarketPairs => "num_market_pairs",
            Self::Volume24h => "volume_24h",
            Self::PercentChange1h => "percent_change_1h",
            Self::PercentChange24h => "percent_change_24h",
            Self::PercentChange7d => "percent_change_7d",
            Self::MarketCapByTotalSupplyStrict => "market_cap_by_total_supply_strict",
            Self::Volume7d => "volume_7d",
            Self::Volume30d => "volume_30d",
        }
    }
}

/// Sort field for the historical listings endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingsHistoricalSort {
    CmcRank,
    Name,
    Symbol,
    DateAdded,
    MarketCap,
    Price,
    CirculatingSupply,
    TotalSupply,
    MaxSupply,
    Volume24h,
    PercentChange1h,
    PercentChange24h,
    PercentChange7d,
    MarketCapByTotalSupplyStrict,
    Volume7d,
}

impl ListingsHistoricalSort {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CmcRank => "cmc_rank",
            Self::Name => "name",
            Self::Symbol => "symbol",
            Self::DateAdded => "date_added",
            Self::MarketCap => "market_cap",
            Self::Price => "price",
            Self::CirculatingSupply => "circulating_supply",
            Self::TotalSupply => "total_supply",
            Self::MaxSupply => "max_supply",
            Self::Volume24h => "volume_24h",
            Self::PercentChange1h => "percent_change_1h",
            Self::PercentChange24h => "percent_change_24h",
            Self::PercentChange7d => "percent_change_7d",
            Self::MarketCapByTotalSupplyStrict => "market_cap_by_total_supply_strict",
            Self::Volume7d => "volume_7d",
        }
    }
}

/// Sort field for the market pairs endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketPairsSort {
    Volume24hStrict,
    CmcRank,
    EffectiveLiquidity,
    MarketScore,
    MarketReputation,
}

impl MarketPairsSort {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Volume24hStrict => "volume_24h_strict",
            Self::CmcRank => "cmc_rank",
            Self::EffectiveLiquidity => "effective_liquidity",
            Self::MarketScore => "market_score",
            Self::MarketReputation => "market_reputation",
        }
    }
}

/// Sampling interval for historical quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteInterval {
    Yearly,
    Monthly,
    Weekly,
    Daily,
    Hourly,
    Minutes5,
    Minutes10,
    Minutes15,
    Minutes30,
    Minutes45,
    Hours1,
    Hours2,
    Hours3,
    Hours6,
    Hours12,
    Days1,
    Days2,
    Days3,
    Days7,
    Days14,
    Days15,
    Days30,
    Days60,
    Days90,
    Days365,
}

impl QuoteInterval {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yearly => "yearly",
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
            Self::Daily => "daily",
            Self::Hourly => "hourly",
            Self::Minutes5 => "5m",
            Self::Minutes10 => "10m",
            Self::Minutes15 => "15m",
            Self::Minutes30 => "30m",
            Self::Minutes45 => "45m",
            Self::Hours1 => "1h",
            Self::Hours2 => "2h",
            Self::Hours3 => "3h",
            Self::Hours6 => "6h",
            Self::Hours12 => "12h",
            Self::Days1 => "1d",
            Self::Days2 => "2d",
            Self::Days3 => "3d",
            Self::Days7 => "7d",
            Self::Days14 => "14d",
            Self::Days15 => "15d",
            Self::Days30 => "30d",
            Self::Days60 => "60d",
            Self::Days90 => "90d",
            Self::Days365 => "365d",
        }
    }
}

/// Sampling interval for historical OHLCV data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OhlcvInterval {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Hours1,
    Hours2,
    Hours3,
    Hours4,
    Hours6,
    Hours12,
    Days1,
    Days2,
    Days3,
    Days7,
    Days14,
    Days15,
    Days30,
    Days60,
    Days90,
    Days365,
}

impl OhlcvInterval {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Hours1 => "1h",
            Self::Hours2 => "2h",
            Self::Hours3 => "3h",
            Self::Hours4 => "4h",
            Self::Hours6 => "6h",
            Self::Hours12 => "12h",
            Self::Days1 => "1d",
            Self::Days2 => "2d",
            Self::Days3 => "3d",
            Self::Days7 => "7d",
            Self::Days14 => "14d",
            Self::Days15 => "15d",
            Self::Days30 => "30d",
            Self::Days60 => "60d",
            Self::Days90 => "90d",
            Self::Days365 => "365d",
        }
    }
}

/// Time period bucketing for historical OHLCV rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OhlcvTimePeriod {
    Daily,
    Hourly,
}

impl OhlcvTimePeriod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }
}

/// Window for price performance statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTimePeriod {
    AllTime,
    Yesterday,
    Hours24,
    Days7,
    Days30,
    Days90,
    Days365,
    YearToDate,
}

impl PerformanceTimePeriod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllTime => "all",
            Self::Yesterday => "yesterday",
            Self::Hours24 => "24h",
            Self::Days7 => "7d",
            Self::Days30 => "30d",
            Self::Days90 => "90d",
            Self::Days365 => "365d",
            Self::YearToDate => "ytd",
        }
    }
}
