use tastytrade_model::presentation::market_metrics::{
    DividendInfo, EarningsReport, MarketMetricInfo,
};

const METRICS_JSON: &str = r#"{
    "symbol": "AAPL",
    "implied-volatility-index": "0.2314",
    "implied-volatility-index-5-day-change": "-0.012",
    "implied-volatility-index-rank": "0.18",
    "tos-implied-volatility-index-rank": "0.21",
    "tw-implied-volatility-index-rank": "0.18",
    "implied-volatility-percentile": "0.35",
    "implied-volatility-updated-at": "2024-03-15T20:00:00.000+00:00",
    "implied-volatility-30-day": "23.14",
    "historical-volatility-30-day": "19.8",
    "historical-volatility-60-day": "21.1",
    "historical-volatility-90-day": "20.4",
    "iv-hv-30-day-difference": "3.34",
    "liquidity-rating": 4,
    "beta": "1.21",
    "corr-spy-3month": "0.78",
    "market-cap": "2640000000000",
    "price-earnings-ratio": "27.1",
    "earnings-per-share": "6.43",
    "dividend-rate-per-share": "0.96",
    "dividend-yield": "",
    "dividend-ex-date": "2024-02-09",
    "borrow-rate": "0.0",
    "created-at": "2024-03-15",
    "option-expiration-implied-volatilities": [
        {
            "expiration-date": "2024-04-19",
            "option-chain-type": "Standard",
            "settlement-type": "PM",
            "implied-volatility": "0.2245"
        }
    ],
    "earnings": {
        "visible": true,
        "expected-report-date": "2024-05-02",
        "estimated": false,
        "late-flag": 0,
        "actual-eps": "",
        "consensus-estimate": "1.5"
    }
}"#;

#[test]
fn test_market_metrics_decode() {
    let metrics: MarketMetricInfo = serde_json::from_str(METRICS_JSON).unwrap();
    assert_eq!(metrics.symbol, "AAPL");
    assert_eq!(metrics.implied_volatility_index.value(), 0.2314);
    assert_eq!(metrics.implied_volatility_index_5_day_change.value(), -0.012);
    assert_eq!(metrics.liquidity_rating, 4);
    assert_eq!(metrics.market_cap.value(), 2.64e12);
    assert_eq!(metrics.dividend_yield.value(), 0.0);
    assert!(metrics.implied_volatility_updated_at.is_some());
    assert_eq!(metrics.beta_updated_at, None);
}

#[test]
fn test_market_metrics_date_only_fields_stay_text() {
    let metrics: MarketMetricInfo = serde_json::from_str(METRICS_JSON).unwrap();
    assert_eq!(metrics.created_at, "2024-03-15");
    assert_eq!(metrics.dividend_ex_date.as_deref(), Some("2024-02-09"));
}

#[test]
fn test_market_metrics_nested_records() {
    let metrics: MarketMetricInfo = serde_json::from_str(METRICS_JSON).unwrap();
    let expirations = &metrics.option_expiration_implied_volatilities;
    assert_eq!(expirations.len(), 1);
    assert_eq!(expirations[0].implied_volatility.value(), 0.2245);

    let earnings = metrics.earnings.unwrap();
    assert_eq!(earnings.expected_report_date, "2024-05-02");
    assert_eq!(earnings.actual_eps.value(), 0.0);
    assert_eq!(earnings.consensus_estimate.value(), 1.5);
}

#[test]
fn test_market_metrics_malformed_value_fails() {
    let payload = METRICS_JSON.replace(r#""beta": "1.21""#, r#""beta": "high""#);
    let err = serde_json::from_str::<MarketMetricInfo>(&payload).unwrap_err();
    assert!(err.to_string().contains("high"));
}

#[test]
fn test_dividend_and_earnings_history() {
    let dividends: Vec<DividendInfo> = serde_json::from_str(
        r#"[{"occurred-date": "2024-02-09", "amount": "0.24"},
            {"occurred-date": "2023-11-10", "amount": "0.24"}]"#,
    )
    .unwrap();
    assert_eq!(dividends.len(), 2);
    assert_eq!(dividends[0].amount.value(), 0.24);

    let reports: Vec<EarningsReport> =
        serde_json::from_str(r#"[{"occurred-date": "2024-02-01", "eps": "2.18"}]"#).unwrap();
    assert_eq!(reports[0].eps.value(), 2.18);
}
