use chrono::NaiveDate;
use tastytrade_model::error::AppError;
use tastytrade_model::utils::date::parse_wire_date;

#[test]
fn test_parse_wire_date() {
    assert_eq!(
        parse_wire_date("2024-03-15").unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    );
    assert_eq!(
        parse_wire_date(" 2024-02-29 ").unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
}

#[test]
fn test_parse_wire_date_rejects_other_formats() {
    for text in ["", "2024-02-30", "15/03/2024", "2024-03-15T14:30:00Z"] {
        let err = parse_wire_date(text).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)), "{text}");
    }
}
