use medcal_booking::config::{parse_log_level, BookingConfig, DEFAULT_DATABASE_URL};
use rstest::rstest;
use tracing::Level;

#[test]
fn test_default_config() {
    let config = BookingConfig::default();

    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(config.log_level, Level::INFO);
}

#[rstest]
#[case("trace", Level::TRACE)]
#[case("debug", Level::DEBUG)]
#[case("info", Level::INFO)]
#[case("WARN", Level::WARN)]
#[case(" error ", Level::ERROR)]
#[case("verbose", Level::INFO)]
#[case("", Level::INFO)]
fn test_parse_log_level(#[case] raw: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(raw), expected);
}
