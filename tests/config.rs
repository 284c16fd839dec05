mod tests {
    use std::io::Write;
    use std::time::Duration;

    use remote_light_composer::{
        AppConfig, ConfigError, ConfigLayer, StripLength, config::DEFAULT_BASE_URL,
    };

    #[test]
    fn test_defaults_without_cookie_for_dry_run() {
        let config = AppConfig::resolve(None, ConfigLayer::default(), false).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.strip, StripLength::DEFAULT);
        assert_eq!(config.request_timeout, None);
        assert!(config.cookie.is_none());
        assert!(matches!(
            config.client_config(),
            Err(ConfigError::MissingCookie)
        ));
    }

    #[test]
    fn test_missing_cookie() {
        let result = AppConfig::resolve(None, ConfigLayer::default(), true);
        assert!(matches!(result, Err(ConfigError::MissingCookie)));

        let blank = ConfigLayer {
            cookie: Some(String::new()),
            ..ConfigLayer::default()
        };
        let result = AppConfig::resolve(None, blank, true);
        assert!(matches!(result, Err(ConfigError::MissingCookie)));
    }

    #[test]
    fn test_file_layer_under_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
base_url = "https://lights.local:443"
cookie = "session=from-file"
strip_length = 300
request_timeout_ms = 2500
"#
        )
        .unwrap();

        let layer = ConfigLayer::load(file.path()).unwrap();
        let overrides = ConfigLayer {
            strip_length: Some(120),
            seed: Some(9),
            ..ConfigLayer::default()
        };
        let config = AppConfig::resolve(Some(layer), overrides, true).unwrap();

        assert_eq!(config.base_url, "https://lights.local:443");
        assert_eq!(config.cookie.as_ref().unwrap().expose(), "session=from-file");
        assert_eq!(config.strip.get(), 120);
        assert_eq!(config.request_timeout, Some(Duration::from_millis(2500)));
        assert_eq!(config.seed, Some(9));

        let client = config.client_config().unwrap();
        assert_eq!(client.strip.get(), 120);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = ConfigLayer::from_toml_str("strip_lenght = 10\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_strip_length() {
        let layer = ConfigLayer::from_toml_str("strip_length = 0\n").unwrap();
        let result = AppConfig::resolve(Some(layer), ConfigLayer::default(), false);
        assert!(matches!(result, Err(ConfigError::InvalidStripLength)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigLayer::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_debug_hides_cookie() {
        let layer = ConfigLayer {
            cookie: Some("session=secret".to_owned()),
            ..ConfigLayer::default()
        };
        assert!(!format!("{:?}", layer).contains("secret"));
    }
}
