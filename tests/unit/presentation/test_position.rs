use chrono::{TimeZone, Utc};
use tastytrade_model::presentation::position::{AccountPosition, QUANTITY_DIRECTION_SHORT};

fn position_json(direction: &str) -> String {
    format!(
        r#"{{
            "account-number": "5WT00001",
            "symbol": "AAPL  240419C00180000",
            "instrument-type": "Equity Option",
            "underlying-symbol": "AAPL",
            "quantity": "3",
            "quantity-direction": "{direction}",
            "close-price": "4.15",
            "average-open-price": "3.9",
            "average-yearly-market-close-price": "3.9",
            "average-daily-market-close-price": "4.15",
            "mark": "1245.0",
            "mark-price": "4.15",
            "multiplier": 100,
            "cost-effect": "Credit",
            "is-suppressed": false,
            "is-frozen": false,
            "restricted-quantity": "0",
            "expires-at": "2024-04-19T20:15:00.000+00:00",
            "fixing-price": "",
            "realized-day-gain": "12.5",
            "realized-day-gain-effect": "Debit",
            "realized-day-gain-date": "2024-03-15",
            "realized-today": "0.0",
            "realized-today-effect": "None",
            "realized-today-date": "2024-03-15",
            "created-at": "2024-03-01T15:00:00.000+00:00",
            "updated-at": "2024-03-15T15:00:00.000+00:00"
        }}"#
    )
}

#[test]
fn test_position_decodes() {
    let position: AccountPosition = serde_json::from_str(&position_json("Long")).unwrap();
    assert_eq!(position.symbol, "AAPL  240419C00180000");
    assert_eq!(position.quantity.value(), 3.0);
    assert_eq!(position.multiplier, 100);
    assert_eq!(position.fixing_price.value(), 0.0);
    assert_eq!(position.realized_day_gain_date, "2024-03-15");
    assert_eq!(
        position.expires_at,
        Some(Utc.with_ymd_and_hms(2024, 4, 19, 20, 15, 0).unwrap())
    );
}

#[test]
fn test_position_signed_quantity() {
    let long: AccountPosition = serde_json::from_str(&position_json("Long")).unwrap();
    assert_eq!(long.signed_quantity(), 3.0);

    let short: AccountPosition =
        serde_json::from_str(&position_json(QUANTITY_DIRECTION_SHORT)).unwrap();
    assert_eq!(short.signed_quantity(), -3.0);
}

#[test]
fn test_position_list() {
    let payload = format!("[{}, {}]", position_json("Long"), position_json("Short"));
    let positions: Vec<AccountPosition> = serde_json::from_str(&payload).unwrap();
    assert_eq!(positions.len(), 2);
    let net: f64 = positions.iter().map(AccountPosition::signed_quantity).sum();
    assert_eq!(net, 0.0);
}

#[test]
fn test_position_malformed_mark_fails() {
    let payload = position_json("Long").replace(r#""mark": "1245.0""#, r#""mark": "--""#);
    assert!(serde_json::from_str::<AccountPosition>(&payload).is_err());
}
