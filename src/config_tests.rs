//! Unit tests for configuration module
//!
//! These tests validate configuration parsing and defaults.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use crate::config::*;
    use crate::embeddings::Strategy;

    // ====== Default Value Tests ======

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(config.server.enable_cors);
        assert_eq!(config.catalog_path(), PathBuf::from("data.json").as_path());
        assert_eq!(config.strategy(), Strategy::TfIdf);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_bind_address() {
        let mut config = AppConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:5000");

        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9000;
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    // ====== TOML Parsing Tests ======

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.strategy(), Strategy::TfIdf);
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 7000

            [matcher]
            strategy = "dense"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.strategy(), Strategy::Dense);
        assert_eq!(config.catalog_path(), PathBuf::from("data.json").as_path());
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let result = toml::from_str::<AppConfig>(
            r#"
            [matcher]
            strategy = "bm25"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [catalog]
            path = "faq/answers.json"

            [logging]
            level = "debug"
            directory = "/tmp/faqbot-logs"
            "#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.catalog_path(),
            PathBuf::from("faq/answers.json").as_path()
        );
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.directory, PathBuf::from("/tmp/faqbot-logs"));
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let err = AppConfig::from_file("/definitely/not/here/config.toml").unwrap_err();
        assert!(matches!(err, crate::FaqBotError::Io(_)));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let rendered = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.strategy(), config.strategy());
    }
}
