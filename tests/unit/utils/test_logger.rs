use tastytrade_model::utils::logger::{parse_level, setup_logger, setup_logger_with_level};
use tracing::Level;

#[test]
fn test_parse_level() {
    assert_eq!(parse_level("TRACE"), Level::TRACE);
    assert_eq!(parse_level("debug"), Level::DEBUG);
    assert_eq!(parse_level("Warning"), Level::WARN);
    assert_eq!(parse_level(" error "), Level::ERROR);
    assert_eq!(parse_level("INFO"), Level::INFO);
    assert_eq!(parse_level("verbose"), Level::INFO);
}

#[test]
fn test_setup_logger_is_idempotent() {
    setup_logger();
    setup_logger_with_level("DEBUG");
    setup_logger();
    tracing::info!("logger installed");
}
