use crate::presentation::serialization::LenientFloat;
use crate::utils::finance::signed_amount;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Current balances of an account
///
/// Every monetary field is transmitted as a quoted decimal string, and the API
/// sends `""` for values that do not apply to the account; those decode to zero.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct AccountBalance {
    /// Account the balances belong to
    pub account_number: String,
    /// Settled cash
    pub cash_balance: LenientFloat,
    /// Market value of long equity positions
    pub long_equity_value: LenientFloat,
    /// Market value of short equity positions
    pub short_equity_value: LenientFloat,
    /// Market value of long derivative positions
    pub long_derivative_value: LenientFloat,
    /// Market value of short derivative positions
    pub short_derivative_value: LenientFloat,
    /// Notional value of long futures
    pub long_futures_value: LenientFloat,
    /// Notional value of short futures
    pub short_futures_value: LenientFloat,
    /// Market value of long futures options
    pub long_futures_derivative_value: LenientFloat,
    /// Market value of short futures options
    pub short_futures_derivative_value: LenientFloat,
    /// Long value eligible as margin collateral
    pub long_margineable_value: LenientFloat,
    /// Short value eligible as margin collateral
    pub short_margineable_value: LenientFloat,
    /// Equity used for margin calculations
    pub margin_equity: LenientFloat,
    /// Buying power for equities
    pub equity_buying_power: LenientFloat,
    /// Buying power for options
    pub derivative_buying_power: LenientFloat,
    /// Buying power for day trades
    pub day_trading_buying_power: LenientFloat,
    /// Margin required by open futures positions
    pub futures_margin_requirement: LenientFloat,
    /// Funds available for new trades
    pub available_trading_funds: LenientFloat,
    /// Maintenance margin requirement
    pub maintenance_requirement: LenientFloat,
    /// Outstanding maintenance call amount
    pub maintenance_call_value: LenientFloat,
    /// Outstanding Reg T call amount
    pub reg_t_call_value: LenientFloat,
    /// Outstanding day trading call amount
    pub day_trading_call_value: LenientFloat,
    /// Outstanding day equity call amount
    pub day_equity_call_value: LenientFloat,
    /// Net liquidating value of the whole account
    pub net_liquidating_value: LenientFloat,
    /// Cash that can be withdrawn right now
    pub cash_available_to_withdraw: LenientFloat,
    /// Day trade excess
    pub day_trade_excess: LenientFloat,
    /// Cash pending settlement, unsigned
    pub pending_cash: LenientFloat,
    /// Sign of `pending-cash`: "Credit", "Debit" or "None"
    pub pending_cash_effect: String,
    pub long_cryptocurrency_value: LenientFloat,
    pub short_cryptocurrency_value: LenientFloat,
    pub cryptocurrency_margin_requirement: LenientFloat,
    pub unsettled_cryptocurrency_fiat_amount: LenientFloat,
    pub unsettled_cryptocurrency_fiat_effect: String,
    pub closed_loop_available_balance: LenientFloat,
    pub equity_offering_margin_requirement: LenientFloat,
    pub long_bond_value: LenientFloat,
    pub bond_margin_requirement: LenientFloat,
    /// Snapshot date as `YYYY-MM-DD` text
    pub snapshot_date: String,
    pub reg_t_margin_requirement: LenientFloat,
    pub futures_overnight_margin_requirement: LenientFloat,
    pub futures_intraday_margin_requirement: LenientFloat,
    pub maintenance_excess: LenientFloat,
    pub pending_margin_interest: LenientFloat,
    pub effective_cryptocurrency_buying_power: LenientFloat,
    /// ISO currency code of the balances
    pub currency: String,
    /// Last time the balances were recomputed
    pub updated_at: Option<DateTime<Utc>>,
}

impl AccountBalance {
    /// Pending cash with its effect applied (debits are negative)
    #[must_use]
    pub fn signed_pending_cash(&self) -> f64 {
        signed_amount(self.pending_cash.value(), &self.pending_cash_effect)
    }
}

/// Balances captured at a point in time
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct AccountBalanceSnapshot {
    /// Balance values at the time of the snapshot
    #[serde(flatten)]
    pub balance: AccountBalance,
    /// "BOD" or "EOD"
    pub time_of_day: String,
}

/// One bar of net liquidating value history
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct NetLiqOhlc {
    pub open: LenientFloat,
    pub high: LenientFloat,
    pub low: LenientFloat,
    pub close: LenientFloat,
    pub pending_cash_open: LenientFloat,
    pub pending_cash_high: LenientFloat,
    pub pending_cash_low: LenientFloat,
    pub pending_cash_close: LenientFloat,
    pub total_open: LenientFloat,
    pub total_high: LenientFloat,
    pub total_low: LenientFloat,
    pub total_close: LenientFloat,
    /// Bar time as sent by the API
    pub time: String,
}

/// Order and position size limits for an account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct PositionLimit {
    pub id: i64,
    pub account_number: String,
    pub equity_order_size: i64,
    pub equity_option_order_size: i64,
    pub future_order_size: i64,
    pub future_option_order_size: i64,
    pub underlying_opening_order_limit: i64,
    pub equity_position_size: i64,
    pub equity_option_position_size: i64,
    pub future_position_size: i64,
    pub future_option_position_size: i64,
}
