use crate::{ConfigError, Environment, FromEnv};

/// Allowed CORS origins, read from the comma-separated `CORS_ALLOWED_ORIGIN`.
///
/// An empty list means "not configured". Production refuses to start in that
/// case; development falls back to a permissive policy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.allowed_origins.is_empty()
    }

    fn parse(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let allowed_origins = std::env::var("CORS_ALLOWED_ORIGIN")
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default();

        let config = Self { allowed_origins };

        if !config.is_configured() && Environment::from_env().is_production() {
            return Err(ConfigError::Invalid(
                "CORS_ALLOWED_ORIGIN must be set in production".to_string(),
            ));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_comma_separated_origins() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some("http://localhost:3000, https://example.com,,"),
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(
                    config.allowed_origins,
                    vec!["http://localhost:3000", "https://example.com"]
                );
            },
        );
    }

    #[test]
    fn test_unset_is_allowed_in_development() {
        temp_env::with_vars(
            [("CORS_ALLOWED_ORIGIN", None::<&str>), ("APP_ENV", None)],
            || {
                let config = CorsConfig::from_env().unwrap();
                assert!(!config.is_configured());
            },
        );
    }

    #[test]
    fn test_unset_is_rejected_in_production() {
        temp_env::with_vars(
            [("CORS_ALLOWED_ORIGIN", None::<&str>), ("APP_ENV", Some("production"))],
            || {
                let err = CorsConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
            },
        );
    }
}
