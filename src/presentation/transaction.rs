use crate::error::AppResult;
use crate::presentation::serialization::LenientFloat;
use crate::utils::date::parse_wire_date;
use crate::utils::finance::signed_amount;
use chrono::{DateTime, NaiveDate, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Entry of the account transaction history
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Transaction {
    /// Transaction identifier
    pub id: i64,
    /// Account the transaction was booked to
    pub account_number: String,
    /// Traded symbol, absent for cash movements
    pub symbol: Option<String>,
    pub instrument_type: Option<String>,
    pub underlying_symbol: Option<String>,
    /// "Trade", "Money Movement", "Receive Deliver", ...
    pub transaction_type: String,
    /// Refinement of `transaction-type`, e.g. "Buy to Open" or "Deposit"
    pub transaction_sub_type: String,
    pub description: String,
    pub action: Option<String>,
    pub quantity: LenientFloat,
    pub price: LenientFloat,
    /// Execution time
    pub executed_at: DateTime<Utc>,
    /// Trade date as `YYYY-MM-DD` text
    pub transaction_date: String,
    /// Gross value, unsigned
    pub value: LenientFloat,
    pub value_effect: String,
    pub regulatory_fees: LenientFloat,
    pub regulatory_fees_effect: String,
    pub clearing_fees: LenientFloat,
    pub clearing_fees_effect: String,
    pub other_charge: LenientFloat,
    pub other_charge_effect: String,
    pub other_charge_description: Option<String>,
    /// Value net of fees and commissions, unsigned
    pub net_value: LenientFloat,
    pub net_value_effect: String,
    pub commission: LenientFloat,
    pub commission_effect: String,
    pub proprietary_index_option_fees: LenientFloat,
    pub proprietary_index_option_fees_effect: String,
    pub is_estimated_fee: bool,
    pub ext_exchange_order_number: Option<String>,
    pub ext_global_order_number: i64,
    pub ext_group_id: Option<String>,
    pub ext_group_fill_id: Option<String>,
    pub ext_exec_id: Option<String>,
    pub exec_id: Option<String>,
    pub exchange: Option<String>,
    /// Order that produced the transaction, zero for non-trade entries
    pub order_id: i64,
    /// Transaction reversed by this one, zero when none
    pub reverses_id: i64,
    pub exchange_affiliation_identifier: Option<String>,
    /// Cost basis reconciliation date as `YYYY-MM-DD` text
    pub cost_basis_reconciliation_date: Option<String>,
    pub leg_count: i64,
    pub destination_venue: Option<String>,
    pub agency_price: LenientFloat,
    pub principal_price: LenientFloat,
    pub currency: String,
    /// Tax lots touched by the transaction
    pub lots: Vec<Lot>,
}

impl Transaction {
    /// Gross value with its effect applied
    #[must_use]
    pub fn signed_value(&self) -> f64 {
        signed_amount(self.value.value(), &self.value_effect)
    }

    /// Net value with its effect applied
    #[must_use]
    pub fn signed_net_value(&self) -> f64 {
        signed_amount(self.net_value.value(), &self.net_value_effect)
    }

    /// Parses `transaction-date`
    ///
    /// # Errors
    /// Returns an error when the text is not a `YYYY-MM-DD` date
    pub fn parsed_transaction_date(&self) -> AppResult<NaiveDate> {
        parse_wire_date(&self.transaction_date)
    }
}

/// Tax lot affected by a transaction
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Lot {
    pub id: String,
    pub transaction_id: i64,
    pub quantity: LenientFloat,
    pub price: LenientFloat,
    pub quantity_direction: String,
    pub executed_at: DateTime<Utc>,
    /// Trade date as `YYYY-MM-DD` text
    pub transaction_date: String,
}

/// Total fees charged on a given day
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct TransactionFees {
    pub total_fees: LenientFloat,
    pub total_fees_effect: String,
}

impl TransactionFees {
    /// Total fees with their effect applied
    #[must_use]
    pub fn signed_total_fees(&self) -> f64 {
        signed_amount(self.total_fees.value(), &self.total_fees_effect)
    }
}
