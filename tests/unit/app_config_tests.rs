/*!
 * Tests for application configuration functionality
 */

use std::path::Path;
use anyhow::Result;
use subanon::app_config::{Config, LogLevel, OutputNaming};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.naming, OutputNaming::Batch);
    assert!(!config.pause_on_exit);
}

/// Test loading a partial JSON file
#[test]
fn test_from_file_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", r#"{ "naming": "single" }"#)?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.naming, OutputNaming::Single);
    assert_eq!(config.log_level, LogLevel::Info);

    Ok(())
}

/// Test loading a full JSON file
#[test]
fn test_from_file_withFullJson_shouldReadEveryField() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let json = r#"{ "log_level": "debug", "naming": "batch", "pause_on_exit": true }"#;
    let path = common::create_test_file(temp_dir.path(), "conf.json", json)?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.naming, OutputNaming::Batch);
    assert!(config.pause_on_exit);

    Ok(())
}

/// Test that invalid files produce errors with context
#[test]
fn test_from_file_withInvalidInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", r#"{ "naming": "sideways" }"#)?;

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));

    let err = Config::from_file(temp_dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to open config file"));

    Ok(())
}

/// Test run validation
#[test]
fn test_validate_withOutputOverride_shouldRequireSingleInput() {
    let config = Config::default();
    let output = Path::new("out.srt");

    assert!(config.validate(None, 3).is_ok());
    assert!(config.validate(Some(output), 1).is_ok());
    assert!(config.validate(Some(output), 2).is_err());
    assert!(config.validate(None, 0).is_err());
}

/// Test naming parsing and display
#[test]
fn test_output_naming_fromStr_shouldParseCaseInsensitively() {
    assert_eq!("BATCH".parse::<OutputNaming>().unwrap(), OutputNaming::Batch);
    assert_eq!("single".parse::<OutputNaming>().unwrap(), OutputNaming::Single);
    assert!("other".parse::<OutputNaming>().is_err());
    assert_eq!(OutputNaming::Single.to_string(), "single");
}

/// Test log level mapping
#[test]
fn test_log_level_toLevelFilter_shouldMapEveryLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
