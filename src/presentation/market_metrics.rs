use crate::presentation::serialization::LenientFloat;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Volatility, liquidity and fundamentals snapshot for a symbol
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct MarketMetricInfo {
    /// Symbol the metrics describe
    pub symbol: String,
    /// Implied volatility index
    pub implied_volatility_index: LenientFloat,
    /// Change of the implied volatility index over five days
    pub implied_volatility_index_5_day_change: LenientFloat,
    /// IV rank from the configured source
    pub implied_volatility_index_rank: LenientFloat,
    pub tos_implied_volatility_index_rank: LenientFloat,
    pub tw_implied_volatility_index_rank: LenientFloat,
    pub tos_implied_volatility_index_rank_updated_at: Option<DateTime<Utc>>,
    pub implied_volatility_index_rank_source: Option<String>,
    /// IV percentile
    pub implied_volatility_percentile: LenientFloat,
    pub implied_volatility_updated_at: Option<DateTime<Utc>>,
    pub implied_volatility_30_day: LenientFloat,
    pub historical_volatility_30_day: LenientFloat,
    pub historical_volatility_60_day: LenientFloat,
    pub historical_volatility_90_day: LenientFloat,
    pub iv_hv_30_day_difference: LenientFloat,
    pub liquidity_value: LenientFloat,
    pub liquidity_rank: LenientFloat,
    /// Liquidity rating from 0 to 4
    pub liquidity_rating: i64,
    pub beta: LenientFloat,
    pub beta_updated_at: Option<DateTime<Utc>>,
    /// Correlation with SPY over three months
    pub corr_spy_3month: LenientFloat,
    pub market_cap: LenientFloat,
    pub price_earnings_ratio: LenientFloat,
    pub earnings_per_share: LenientFloat,
    pub dividend_rate_per_share: LenientFloat,
    pub dividend_yield: LenientFloat,
    /// Dates below are `YYYY-MM-DD` text
    pub dividend_ex_date: Option<String>,
    pub dividend_next_date: Option<String>,
    pub dividend_pay_date: Option<String>,
    pub dividend_updated_at: Option<DateTime<Utc>>,
    pub lendability: Option<String>,
    pub borrow_rate: LenientFloat,
    pub listed_market: Option<String>,
    /// Creation date as `YYYY-MM-DD` text
    pub created_at: String,
    pub updated_at: Option<DateTime<Utc>>,
    /// Implied volatility per option expiration
    pub option_expiration_implied_volatilities: Vec<OptionExpirationImpliedVolatility>,
    /// Upcoming earnings, when known
    pub earnings: Option<EarningsInfo>,
}

/// Implied volatility of one option expiration
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct OptionExpirationImpliedVolatility {
    pub expiration_date: String,
    pub option_chain_type: String,
    pub settlement_type: String,
    pub implied_volatility: LenientFloat,
}

/// Next earnings report for a symbol
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct EarningsInfo {
    pub visible: bool,
    pub expected_report_date: String,
    pub estimated: bool,
    pub late_flag: i64,
    pub quarter_end_date: Option<String>,
    pub actual_eps: LenientFloat,
    pub consensus_estimate: LenientFloat,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Historical dividend payment
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct DividendInfo {
    pub occurred_date: String,
    pub amount: LenientFloat,
}

/// Historical earnings report
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct EarningsReport {
    pub occurred_date: String,
    pub eps: LenientFloat,
}
