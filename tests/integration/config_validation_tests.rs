//! Configuration loading and validation

#[cfg(test)]
mod tests {
    use audio_relay::{Config, RelayError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn vars(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let pairs = pairs.to_vec();
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("UPLOAD_PATH", "/tmp/audio-relay-test"),
        ("GROQ_API_KEY", "gsk_test"),
        ("SPEECHIFY_API_URL", "http://127.0.0.1:9/v1/audio/speech"),
        ("SPEECHIFY_API_KEY", "sk_test"),
    ];

    #[test]
    fn test_required_variables_are_enough() {
        let mut config = Config::default();
        config.apply_env(vars(REQUIRED));
        config.validate().unwrap();

        assert_eq!(config.server.address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_each_required_variable_is_enforced() {
        for (missing, _) in REQUIRED {
            let remaining: Vec<_> = REQUIRED
                .iter()
                .copied()
                .filter(|(k, _)| k != missing)
                .collect();

            let mut config = Config::default();
            config.apply_env(vars(&remaining));
            let err = config.validate().unwrap_err();

            assert!(matches!(err, RelayError::Config(_)), "{}", missing);
            assert!(err.to_string().contains(missing), "{}: {}", missing, err);
        }
    }

    #[test]
    fn test_numeric_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "3000"));
        pairs.push(("WORKERS", "2"));
        pairs.push(("MAX_UPLOAD_SIZE", "1048576"));
        pairs.push(("GROQ_TIMEOUT_SECS", "30"));

        let mut config = Config::default();
        config.apply_env(vars(&pairs));

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.worker_count(), 2);
        assert_eq!(config.upload.max_file_size, 1_048_576);
        assert_eq!(
            config.groq.timeout(),
            Some(std::time::Duration::from_secs(30))
        );
        assert_eq!(config.speechify.timeout(), None);
    }

    #[test]
    fn test_invalid_cors_origin_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("CORS_ALLOWED_ORIGINS", "not a url"));

        let mut config = Config::default();
        config.apply_env(vars(&pairs));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("CORS"));
    }

    #[tokio::test]
    async fn test_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
server:
  port: 9100
  cors:
    allowed_origins: ["https://app.example"]
upload:
  path: /tmp/audio-relay-yaml
  max_file_size: 1024
groq:
  api_key: gsk_yaml
speechify:
  api_url: https://api.sws.speechify.com/v1/audio/speech
  api_key: sk_yaml
"#,
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.upload.max_file_size, 1024);
        assert!(!config.server.cors.allows_all_origins());
        assert_eq!(config.speechify.model, "simba-english");
    }

    #[tokio::test]
    async fn test_missing_yaml_file() {
        let result = Config::from_file("/nonexistent/audio-relay.yaml").await;
        match result {
            Err(RelayError::Config(msg)) => assert!(msg.contains("Failed to read config file")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
