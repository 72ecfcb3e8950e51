use dotenv::dotenv;
use std::env;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {

    pub fn global() -> &'static AppConfig {
        CONFIG.get_or_init(|| {
            dotenv().ok();
            Self::from_env()
        })
    }

    // Nothing here is secret, so missing variables fall back to defaults
    // instead of aborting startup.
    fn from_env() -> AppConfig {
        AppConfig {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_env;

    #[test]
    fn test_config_is_singleton() {
        let config1 = AppConfig::global();
        let config2 = AppConfig::global();

        assert!(std::ptr::eq(config1, config2));
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars(vec![("HOST", None::<&str>), ("PORT", None)], || {
            let config = AppConfig::from_env();

            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 8000);
            assert_eq!(config.bind_address(), "0.0.0.0:8000");
        });
    }

    #[test]
    fn test_from_env_overrides() {
        temp_env::with_vars(vec![("HOST", Some("127.0.0.1")), ("PORT", Some("9090"))], || {
            let config = AppConfig::from_env();

            assert_eq!(config.host, "127.0.0.1");
            assert_eq!(config.port, 9090);
        });
    }

    #[test]
    fn test_from_env_ignores_unparsable_port() {
        temp_env::with_vars(vec![("PORT", Some("not-a-port"))], || {
            let config = AppConfig::from_env();

            assert_eq!(config.port, 8000);
        });
    }
}
