#[cfg(test)]
mod tests {
    use promocode_factory_api::config::ApiConfig;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.port, 8081);
        assert_eq!(config.database_url, None);
        assert!(config.seed_fake_data);
        assert!(config.cors_allowed_origins.is_empty());
        assert!(!config.json_logs);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("DATABASE_URL", "postgres://localhost/promocodes"),
            ("SEED_FAKE_DATA", "no"),
            (
                "CORS_ALLOWED_ORIGINS",
                "http://localhost:3000, ,https://admin.example.com",
            ),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/promocodes")
        );
        assert!(!config.seed_fake_data);
        assert_eq!(
            config.cors_allowed_origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://admin.example.com".to_string()
            ]
        );
        assert!(config.json_logs);
    }

    #[test]
    fn test_blank_database_url_means_in_memory() {
        let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("PORT", "70000")]).is_err());
        assert!(config_from(&[("SEED_FAKE_DATA", "maybe")]).is_err());
        assert!(config_from(&[("LOG_FORMAT", "xml")]).is_err());
    }
}
