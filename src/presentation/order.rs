/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::presentation::serialization::LenientFloat;
use crate::utils::finance::signed_amount;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Order as reported by the order endpoints
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Order {
    /// Order identifier
    pub id: i64,
    /// Account the order was placed in
    pub account_number: String,
    /// "Day", "GTC", "GTD", "Ext", ...
    pub time_in_force: String,
    /// Expiry date for GTD orders as `YYYY-MM-DD` text
    pub gtc_date: Option<String>,
    /// "Limit", "Market", "Stop", "Stop Limit", ...
    pub order_type: String,
    /// Order size in units of the ratio between legs
    pub size: i64,
    pub underlying_symbol: String,
    pub underlying_instrument_type: String,
    /// Limit price, unsigned
    pub price: LenientFloat,
    /// Sign of `price`
    pub price_effect: String,
    /// Notional value for notional market orders
    pub value: LenientFloat,
    pub value_effect: String,
    /// Trigger price for stop orders
    pub stop_trigger: LenientFloat,
    /// Order status, e.g. "Received", "Live", "Filled", "Cancelled"
    pub status: String,
    pub contingent_status: Option<String>,
    pub confirmation_status: Option<String>,
    pub cancellable: bool,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancel_user_id: Option<String>,
    pub cancel_username: Option<String>,
    pub editable: bool,
    pub edited: bool,
    pub replacing_order_id: Option<String>,
    pub replaces_order_id: Option<String>,
    pub received_at: Option<DateTime<Utc>>,
    /// Last update as epoch milliseconds
    pub updated_at: i64,
    pub in_flight_at: Option<DateTime<Utc>>,
    pub live_at: Option<DateTime<Utc>>,
    pub reject_reason: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub terminal_at: Option<DateTime<Utc>>,
    pub complex_order_id: i64,
    pub complex_order_tag: Option<String>,
    pub preflight_id: Option<String>,
    pub global_request_id: Option<String>,
    pub external_identifier: Option<String>,
    pub source: Option<String>,
    /// Legs making up the order
    pub legs: Vec<OrderLeg>,
    /// Conditional routing rule, if any
    pub order_rule: Option<OrderRule>,
}

/// One leg of an order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct OrderLeg {
    pub instrument_type: String,
    pub symbol: String,
    pub quantity: LenientFloat,
    pub remaining_quantity: LenientFloat,
    /// "Buy to Open", "Sell to Close", ...
    pub action: String,
    pub fills: Vec<Fill>,
}

impl OrderLeg {
    /// Total quantity filled across all fills of the leg
    #[must_use]
    pub fn filled_quantity(&self) -> f64 {
        self.fills.iter().map(|fill| fill.quantity.value()).sum()
    }
}

/// Execution of part or all of an order leg
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Fill {
    pub ext_group_fill_id: String,
    pub ext_exec_id: String,
    pub fill_id: String,
    pub quantity: LenientFloat,
    pub fill_price: LenientFloat,
    pub filled_at: DateTime<Utc>,
    pub destination_venue: Option<String>,
}

/// Routing rule attached to a conditional order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct OrderRule {
    pub route_after: Option<DateTime<Utc>>,
    pub routed_at: Option<DateTime<Utc>>,
    pub cancel_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub order_conditions: Vec<OrderCondition>,
}

/// Market condition that triggers a conditional order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct OrderCondition {
    pub id: String,
    pub action: String,
    pub symbol: String,
    pub instrument_type: String,
    /// Watched indicator, e.g. "last"
    pub indicator: String,
    /// "gte" or "lte"
    pub comparator: String,
    pub threshold: LenientFloat,
    pub is_threshold_based_on_notional: bool,
    pub triggered_at: Option<DateTime<Utc>>,
    pub triggered_value: LenientFloat,
    pub price_components: Vec<PriceComponent>,
}

/// Component of the price watched by an order condition
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct PriceComponent {
    pub symbol: String,
    pub instrument_type: String,
    pub quantity: LenientFloat,
    pub quantity_direction: String,
}

/// Group of orders linked together (OTO, OCO, OTOCO)
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct ComplexOrder {
    pub id: i64,
    pub account_number: String,
    /// Complex order type, e.g. "OCO"
    #[serde(rename = "type")]
    pub complex_type: String,
    pub terminal_at: Option<DateTime<Utc>>,
    pub ratio_price_threshold: LenientFloat,
    pub ratio_price_comparator: Option<String>,
    pub ratio_price_is_threshold_based_on_notional: bool,
    pub related_orders: Vec<RelatedOrder>,
    pub orders: Vec<Order>,
    /// Order whose fill releases the others
    pub trigger_order: Option<Order>,
}

/// Reference to another order of the same complex order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct RelatedOrder {
    pub id: i64,
    pub complex_order_id: i64,
    pub complex_order_tag: Option<String>,
    pub replaces_order_id: Option<String>,
    pub replacing_order_id: Option<String>,
    pub status: String,
}

/// Result of submitting or dry-running an order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct OrderResponse {
    /// Simple order, when a single order was sent
    pub order: Option<Order>,
    /// Complex order, when a linked group was sent
    pub complex_order: Option<ComplexOrder>,
    pub warnings: Vec<OrderMessage>,
    pub errors: Vec<OrderMessage>,
    pub buying_power_effect: Option<BuyingPowerEffect>,
    pub fee_calculation: Option<FeeCalculation>,
}

/// Warning or error reported by order validation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct OrderMessage {
    pub code: String,
    pub message: String,
    pub preflight_id: Option<String>,
}

/// Effect an order would have on buying power
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct BuyingPowerEffect {
    pub change_in_margin_requirement: LenientFloat,
    pub change_in_margin_requirement_effect: String,
    pub change_in_buying_power: LenientFloat,
    pub change_in_buying_power_effect: String,
    pub current_buying_power: LenientFloat,
    pub current_buying_power_effect: String,
    pub new_buying_power: LenientFloat,
    pub new_buying_power_effect: String,
    pub isolated_order_margin_requirement: LenientFloat,
    pub isolated_order_margin_requirement_effect: String,
    pub is_spread: bool,
    pub impact: LenientFloat,
    pub effect: String,
}

/// Fees an order would incur
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct FeeCalculation {
    pub regulatory_fees: LenientFloat,
    pub regulatory_fees_effect: String,
    pub clearing_fees: LenientFloat,
    pub clearing_fees_effect: String,
    pub commission: LenientFloat,
    pub commission_effect: String,
    pub proprietary_index_option_fees: LenientFloat,
    pub proprietary_index_option_fees_effect: String,
    pub total_fees: LenientFloat,
    pub total_fees_effect: String,
}

impl FeeCalculation {
    /// Total fees with their effect applied
    #[must_use]
    pub fn signed_total_fees(&self) -> f64 {
        signed_amount(self.total_fees.value(), &self.total_fees_effect)
    }
}
