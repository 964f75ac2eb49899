use crate::error::AppResult;
use crate::presentation::serialization::LenientFloat;
use crate::utils::date::parse_wire_date;
use chrono::{DateTime, NaiveDate, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Brokerage account owned or accessible by the authenticated customer
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Account {
    /// Unique account number, the key used by every account-scoped endpoint
    pub account_number: String,
    /// Identifier assigned by an external system
    pub external_id: Option<String>,
    /// When the account was opened
    pub opened_at: DateTime<Utc>,
    /// Customer chosen nickname
    pub nickname: String,
    /// Account type, e.g. "Individual" or "Roth IRA"
    pub account_type_name: String,
    /// Whether the account is flagged as a day trader
    pub day_trader_status: bool,
    /// Closing date, when the account has been closed
    pub closed_at: Option<String>,
    /// Whether the account is closed
    pub is_closed: bool,
    /// Whether the account is a firm error account
    pub is_firm_error: bool,
    /// Whether the account is a firm proprietary account
    pub is_firm_proprietary: bool,
    /// Whether futures trading is approved
    pub is_futures_approved: bool,
    /// Whether the account is a test drive (paper) account
    pub is_test_drive: bool,
    /// "Margin" or "Cash"
    pub margin_or_cash: String,
    /// Whether the account is held by a foreign customer
    pub is_foreign: bool,
    /// Funding date as `YYYY-MM-DD` text
    pub funding_date: Option<String>,
    /// Declared investment objective
    pub investment_objective: String,
    /// Declared liquidity needs
    pub liquidity_needs: String,
    /// Declared risk tolerance
    pub risk_tolerance: String,
    /// Declared investment time horizon
    pub investment_time_horizon: String,
    /// Declared purpose for futures trading
    pub futures_account_purpose: String,
    /// External financial data identifier
    pub external_fdid: Option<String>,
    /// Highest options level the customer is suitable for
    pub suitable_options_level: String,
    /// When the account record was created
    pub created_at: DateTime<Utc>,
    /// User that submitted the account application
    pub submitting_user_id: Option<String>,
}

impl Account {
    /// Parses `funding-date`, returning `None` when the account has no funding date
    ///
    /// # Errors
    /// Returns an error when the text is present but not a `YYYY-MM-DD` date
    pub fn parsed_funding_date(&self) -> AppResult<Option<NaiveDate>> {
        match self.funding_date.as_deref() {
            Some(text) if !text.is_empty() => parse_wire_date(text).map(Some),
            _ => Ok(None),
        }
    }
}

/// An account together with the caller's authority over it
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct AccountAuthority {
    /// The account itself
    pub account: Account,
    /// Authority level, e.g. "owner" or "trade-only"
    pub authority_level: String,
}

/// Trading permissions and restrictions currently applied to an account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct AccountTradingStatus {
    pub id: i64,
    pub account_number: String,
    pub autotrade_account_type: Option<String>,
    pub clearing_account_number: Option<String>,
    pub clearing_aggregation_identifier: Option<String>,
    /// Number of day trades in the current rolling window
    pub day_trade_count: i64,
    pub equities_margin_calculation_type: String,
    pub fee_schedule_name: String,
    /// Multiplier applied to exchange futures margin rates
    pub futures_margin_rate_multiplier: LenientFloat,
    pub has_intraday_equities_margin: bool,
    pub is_aggregated_at_clearing: bool,
    pub is_closed: bool,
    pub is_closing_only: bool,
    pub is_cryptocurrency_closing_only: bool,
    pub is_cryptocurrency_enabled: bool,
    pub is_equity_offering_closing_only: bool,
    pub is_equity_offering_enabled: bool,
    pub is_frozen: bool,
    pub is_full_equity_margin_required: bool,
    pub is_futures_closing_only: bool,
    pub is_futures_intra_day_enabled: bool,
    pub is_futures_enabled: bool,
    pub is_in_day_trade_equity_maintenance_call: bool,
    pub is_in_margin_call: bool,
    pub is_pattern_day_trader: bool,
    pub is_portfolio_margin_enabled: bool,
    pub is_risk_reducing_only: bool,
    pub is_small_notional_futures_intra_day_enabled: bool,
    pub is_roll_the_day_forward_enabled: bool,
    pub are_far_otm_net_options_restricted: bool,
    pub options_level: String,
    /// Pattern day trader reset date as `YYYY-MM-DD` text
    pub pdt_reset_on: Option<String>,
    pub short_calls_enabled: bool,
    pub small_notional_futures_margin_rate_multiplier: LenientFloat,
    pub cmta_override: i64,
    pub enhanced_fraud_safeguards_enabled_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}
