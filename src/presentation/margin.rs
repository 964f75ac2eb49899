use crate::presentation::serialization::LenientFloat;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Margin requirement report for an account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct MarginRequirements {
    pub account_number: String,
    pub description: String,
    /// "Reg T", "Portfolio Margin", ...
    pub margin_calculation_type: String,
    pub option_level: String,
    pub margin_requirement: LenientFloat,
    pub margin_requirement_effect: String,
    pub initial_requirement: LenientFloat,
    pub initial_requirement_effect: String,
    pub maintenance_requirement: LenientFloat,
    pub maintenance_requirement_effect: String,
    pub margin_equity: LenientFloat,
    pub margin_equity_effect: String,
    pub option_buying_power: LenientFloat,
    pub option_buying_power_effect: String,
    pub reg_t_margin_requirement: LenientFloat,
    pub reg_t_margin_requirement_effect: String,
    pub reg_t_option_buying_power: LenientFloat,
    pub reg_t_option_buying_power_effect: String,
    pub maintenance_excess: LenientFloat,
    pub maintenance_excess_effect: String,
    /// Requirement breakdown per underlying
    pub groups: Vec<MarginGroup>,
    /// Epoch milliseconds of the state the report was computed from
    pub last_state_timestamp: i64,
}

/// Margin requirement of one underlying or strategy group.
///
/// Groups nest: an underlying group holds strategy groups in `groups`, and the
/// innermost groups list the positions they cover.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct MarginGroup {
    pub description: String,
    pub code: String,
    pub underlying_symbol: String,
    pub underlying_type: String,
    pub expected_price_range_up_percent: LenientFloat,
    pub expected_price_range_down_percent: LenientFloat,
    pub point_of_no_return_percent: LenientFloat,
    pub margin_calculation_type: String,
    pub margin_requirement: LenientFloat,
    pub margin_requirement_effect: String,
    pub initial_requirement: LenientFloat,
    pub initial_requirement_effect: String,
    pub maintenance_requirement: LenientFloat,
    pub maintenance_requirement_effect: String,
    pub buying_power: LenientFloat,
    pub buying_power_effect: String,
    pub price_increase_percent: LenientFloat,
    pub price_decrease_percent: LenientFloat,
    pub groups: Vec<MarginGroup>,
    pub position_entries: Vec<MarginPositionEntry>,
}

impl MarginGroup {
    /// Number of position entries in this group and all nested groups
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.position_entries.len()
            + self
                .groups
                .iter()
                .map(MarginGroup::position_count)
                .sum::<usize>()
    }
}

/// Position covered by a margin group
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct MarginPositionEntry {
    pub instrument_symbol: String,
    pub instrument_type: String,
    pub quantity: LenientFloat,
    pub average_open_price: LenientFloat,
    pub close_price: LenientFloat,
    pub fixing_price: LenientFloat,
    pub strike_price: LenientFloat,
    pub option_type: Option<String>,
    pub deliverable_quantity: LenientFloat,
    /// Expiration date as `YYYY-MM-DD` text
    pub expiration_date: Option<String>,
}

/// Effective margin rates for an underlying symbol
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct EffectiveMarginRequirements {
    pub underlying_symbol: String,
    pub long_equity_initial: LenientFloat,
    pub short_equity_initial: LenientFloat,
    pub long_equity_maintenance: LenientFloat,
    pub short_equity_maintenance: LenientFloat,
    pub naked_option_standard: LenientFloat,
    pub naked_option_minimum: LenientFloat,
    pub naked_option_floor: LenientFloat,
    pub clearing_identifier: Option<String>,
    pub is_deleted: bool,
}

/// Platform-wide margin configuration
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct MarginRequirementsGlobalConfiguration {
    pub risk_free_rate: LenientFloat,
}
