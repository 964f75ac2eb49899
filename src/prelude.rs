/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Prelude
//!
//! Brings the commonly used types of the crate into scope with a single import.
//!
//! ## Usage
//!
//! ```rust
//! use tastytrade_model::prelude::*;
//!
//! let decoder = ResponseDecoder::new(DecodeConfig::default());
//! let positions: (Vec<AccountPosition>, Option<Pagination>) = decoder
//!     .decode_items(br#"{"data": {"items": []}}"#)
//!     .unwrap();
//! assert!(positions.0.is_empty());
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Library and decoder configuration
pub use crate::application::config::{Config, DecodeConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and result alias
pub use crate::error::{AppError, AppResult};

// ============================================================================
// DECODING
// ============================================================================

/// Body decoder
pub use crate::model::decoder::ResponseDecoder;

/// Response envelopes
pub use crate::model::responses::{
    ApiError, ApiErrorDetail, ApiErrorResponse, DataResponse, ItemsData, ItemsResponse,
    Pagination,
};

/// Lenient numeric decoding
pub use crate::presentation::serialization::{
    LenientFloat, MalformedNumber, lenient_float, lenient_float_opt, parse_lenient_float,
};

// ============================================================================
// RECORDS
// ============================================================================

/// Account records
pub use crate::presentation::account::{Account, AccountAuthority, AccountTradingStatus};

/// Balance records
pub use crate::presentation::balance::{
    AccountBalance, AccountBalanceSnapshot, NetLiqOhlc, PositionLimit,
};

/// Customer records
pub use crate::presentation::customer::{
    AccountType, Address, Customer, CustomerPerson, CustomerSuitability, MarginType,
};

/// Margin records
pub use crate::presentation::margin::{
    EffectiveMarginRequirements, MarginGroup, MarginPositionEntry, MarginRequirements,
    MarginRequirementsGlobalConfiguration,
};

/// Market metric records
pub use crate::presentation::market_metrics::{
    DividendInfo, EarningsInfo, EarningsReport, MarketMetricInfo,
    OptionExpirationImpliedVolatility,
};

/// Order records
pub use crate::presentation::order::{
    BuyingPowerEffect, ComplexOrder, FeeCalculation, Fill, Order, OrderCondition, OrderLeg,
    OrderMessage, OrderResponse, OrderRule, PriceComponent, RelatedOrder,
};

/// Position records
pub use crate::presentation::position::AccountPosition;

/// Transaction records
pub use crate::presentation::transaction::{Lot, Transaction, TransactionFees};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Signed amount helpers
pub use crate::utils::finance::{net_amount, signed_amount};

/// Date-only field parsing
pub use crate::utils::date::parse_wire_date;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use chrono::{DateTime, NaiveDate, Utc};
pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};
