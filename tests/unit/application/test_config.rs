use std::env;
use tastytrade_model::application::config::{Config, DecodeConfig};
use tastytrade_model::constants::{
    DEFAULT_MAX_LOGGED_PAYLOAD_BYTES, LOG_PAYLOAD_ON_ERROR_ENV, MAX_LOGGED_PAYLOAD_BYTES_ENV,
};
use tastytrade_model::model::decoder::ResponseDecoder;

#[test]
fn test_decode_config_default() {
    let config = DecodeConfig::default();
    assert!(!config.log_payload_on_error);
    assert_eq!(config.max_logged_payload_bytes, DEFAULT_MAX_LOGGED_PAYLOAD_BYTES);
    assert_eq!(config.max_logged_payload_bytes, 512);
}

#[test]
fn test_config_reads_environment() {
    unsafe {
        env::set_var(LOG_PAYLOAD_ON_ERROR_ENV, "yes");
        env::set_var(MAX_LOGGED_PAYLOAD_BYTES_ENV, "2048");
        let config = Config::new();
        assert!(config.decode.log_payload_on_error);
        assert_eq!(config.decode.max_logged_payload_bytes, 2048);

        let decoder = ResponseDecoder::from_config(&config);
        assert_eq!(decoder.config(), &config.decode);

        env::set_var(MAX_LOGGED_PAYLOAD_BYTES_ENV, "lots");
        let config = Config::new();
        assert_eq!(
            config.decode.max_logged_payload_bytes,
            DEFAULT_MAX_LOGGED_PAYLOAD_BYTES
        );

        env::remove_var(LOG_PAYLOAD_ON_ERROR_ENV);
        env::remove_var(MAX_LOGGED_PAYLOAD_BYTES_ENV);
    }
}

#[test]
fn test_config_serializes() {
    let config = Config {
        decode: DecodeConfig::default(),
        log_level: "DEBUG".to_string(),
    };
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["log_level"], "DEBUG");
    assert_eq!(value["decode"]["max_logged_payload_bytes"], 512);
    assert!(config.to_string().contains("DEBUG"));
}
