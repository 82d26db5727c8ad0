use std::env;
use std::fs;
use tempfile::tempdir;

#[cfg(test)]
mod config_tests {
    use super::*;
    use event_summary::config::Config;
    use event_summary::live::LiveConfig;
    use std::time::Duration;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();

        assert_eq!(config.logging.level, "WARN");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.logging.output, "console");

        assert_eq!(config.polling.interval_secs, 2);
        assert!(config.output.json_pretty);
        assert!(config.loaded_from.is_none());
    }

    #[test]
    fn test_env_variable_override() {
        env::set_var("EVENT_SUMMARY_POLL_INTERVAL_SECS", "7");
        env::set_var("EVENT_SUMMARY_JSON_PRETTY", "false");

        let mut config = Config::default();
        config
            .apply_env_overrides()
            .expect("Failed to apply env overrides");

        assert_eq!(config.polling.interval_secs, 7);
        assert!(!config.output.json_pretty);

        env::remove_var("EVENT_SUMMARY_POLL_INTERVAL_SECS");
        env::remove_var("EVENT_SUMMARY_JSON_PRETTY");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.polling.interval_secs = 0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.logging.output = "syslog".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_loading() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("event-summary.toml");

        let test_config = r#"
[logging]
level = "DEBUG"
format = "json"
output = "console"

[polling]
interval_secs = 10

[output]
json_pretty = false

[paths]
log_directory = "/custom/logs"
        "#;

        fs::write(&config_path, test_config).expect("Failed to write test config");

        let config = Config::load_from_file(&config_path).expect("Failed to load config");

        assert_eq!(config.logging.level, "DEBUG");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.polling.interval_secs, 10);
        assert!(!config.output.json_pretty);
        assert_eq!(config.loaded_from.as_deref(), Some(config_path.as_path()));

        let live = LiveConfig::from(&config);
        assert_eq!(live.poll_interval, Duration::from_secs(10));
        assert!(!live.json_pretty);
    }

    #[test]
    fn test_malformed_config_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("event-summary.toml");
        fs::write(&config_path, "[polling]\ninterval_secs = \"soon\"\n").unwrap();

        assert!(Config::load_from_file(&config_path).is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let toml_string = toml::to_string_pretty(&config).expect("Failed to serialize to TOML");
        assert!(toml_string.contains("[logging]"));
        assert!(toml_string.contains("[polling]"));
        assert!(toml_string.contains("[output]"));
        assert!(toml_string.contains("[paths]"));

        let deserialized: Config =
            toml::from_str(&toml_string).expect("Failed to deserialize TOML");
        assert!(!toml_string.contains("loaded_from"));
        assert_eq!(config.logging.level, deserialized.logging.level);
        assert_eq!(
            config.polling.interval_secs,
            deserialized.polling.interval_secs
        );
    }
}
