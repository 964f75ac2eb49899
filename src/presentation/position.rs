use crate::presentation::serialization::LenientFloat;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Quantity direction marking a short position
pub const QUANTITY_DIRECTION_SHORT: &str = "Short";

/// Open position held in an account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct AccountPosition {
    /// Account holding the position
    pub account_number: String,
    /// Instrument symbol, e.g. "AAPL" or an OCC option symbol
    pub symbol: String,
    /// Instrument type, e.g. "Equity", "Equity Option", "Future"
    pub instrument_type: String,
    /// Underlying symbol for derivatives, the symbol itself otherwise
    pub underlying_symbol: String,
    /// Unsigned quantity, see `quantity-direction`
    pub quantity: LenientFloat,
    /// "Long", "Short" or "Zero"
    pub quantity_direction: String,
    /// Previous close price
    pub close_price: LenientFloat,
    /// Average price paid per unit
    pub average_open_price: LenientFloat,
    /// Close price at the end of last year
    pub average_yearly_market_close_price: LenientFloat,
    /// Close price at the end of the previous day
    pub average_daily_market_close_price: LenientFloat,
    /// Current mark
    pub mark: LenientFloat,
    /// Current mark price per unit
    pub mark_price: LenientFloat,
    /// Contract multiplier
    pub multiplier: i64,
    /// "Credit" or "Debit" cost effect of the position
    pub cost_effect: String,
    pub is_suppressed: bool,
    pub is_frozen: bool,
    /// Quantity that cannot be traded
    pub restricted_quantity: LenientFloat,
    /// Expiration time for derivatives
    pub expires_at: Option<DateTime<Utc>>,
    /// Fixing price for futures
    pub fixing_price: LenientFloat,
    pub deliverable_type: Option<String>,
    /// Realized gain for the day, unsigned
    pub realized_day_gain: LenientFloat,
    pub realized_day_gain_effect: String,
    /// Date of `realized-day-gain` as `YYYY-MM-DD` text
    pub realized_day_gain_date: String,
    /// Realized gain today, unsigned
    pub realized_today: LenientFloat,
    pub realized_today_effect: String,
    /// Date of `realized-today` as `YYYY-MM-DD` text
    pub realized_today_date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AccountPosition {
    /// Quantity signed by its direction, negative for short positions
    #[must_use]
    pub fn signed_quantity(&self) -> f64 {
        let quantity = self.quantity.value().abs();
        if self.quantity_direction == QUANTITY_DIRECTION_SHORT {
            -quantity
        } else {
            quantity
        }
    }
}
