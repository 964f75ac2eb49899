/// Account, authority and trading status models
pub mod account;
/// Balance, balance snapshot and limit models
pub mod balance;
/// Customer profile models
pub mod customer;
/// Margin requirement models
pub mod margin;
/// Market metric models
pub mod market_metrics;
/// Order, fill and order result models
pub mod order;
/// Position models
pub mod position;
/// Serialization utilities for API responses
pub mod serialization;
/// Transaction history models
pub mod transaction;
