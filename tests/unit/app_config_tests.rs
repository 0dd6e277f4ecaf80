/*!
 * Tests for configuration loading and validation
 */

use yakugo::app_config::Config;

use crate::common;

#[test]
fn test_config_fromPartialJson_shouldFillDefaults() {
    let json = r#"{
        "pipeline": { "batch_size": 10 }
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.pipeline.batch_size, 10);
    assert_eq!(config.pipeline.retry_count, 3);
    assert_eq!(config.pipeline.checkpoint_interval, 100);
    assert_eq!(config.source_language, "en");
    assert_eq!(config.target_language, "ja");
    assert_eq!(config.gateway.endpoint, "http://localhost:9223");
}

#[test]
fn test_config_fromFile_shouldRoundTrip() {
    let dir = common::create_temp_dir().unwrap();
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let path = common::create_test_file(dir.path(), "conf.json", &json).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let loaded: Config = serde_json::from_str(&content).unwrap();

    assert!(loaded.validate().is_ok());
    assert_eq!(loaded.pipeline.batch_size, config.pipeline.batch_size);
    assert_eq!(loaded.gateway.timeout_secs, config.gateway.timeout_secs);
}

#[test]
fn test_validate_withUnsupportedTargetLanguage_shouldFail() {
    let config = Config {
        target_language: "de".to_string(),
        ..Default::default()
    };
    let error = config.validate().unwrap_err().to_string();
    assert!(error.contains("target language"));
}

#[test]
fn test_validate_withEmptyGatewayEndpoint_shouldFail() {
    let mut config = Config::default();
    config.gateway.endpoint = String::new();
    assert!(config.validate().is_err());
}
