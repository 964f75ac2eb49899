mod test_market_metrics;
mod test_order;
mod test_position;
