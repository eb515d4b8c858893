use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub user_service: UserServiceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080 }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UserServiceConfig {
    /// Base URL of the remote user-service, e.g. `http://localhost:8082`.
    pub base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 { 30 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // user_service URL may come from the environment instead of TOML
        self.user_service.normalize_from_env();
        self.user_service.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        Ok(())
    }
}

impl UserServiceConfig {
    pub fn normalize_from_env(&mut self) {
        if self.base_url.trim().is_empty() {
            if let Ok(url) = std::env::var("USER_SERVICE_URL") {
                self.base_url = url;
            }
        }
        // keep URL joining simple downstream
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = default_request_timeout();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(anyhow!(
                "user_service.base_url is empty; set it in config.toml or via USER_SERVICE_URL"
            ));
        }
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("user_service.base_url must start with http:// or https://"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.user_service.base_url.is_empty());
    }

    #[test]
    fn parses_full_config() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9090

            [user_service]
            base_url = "http://users.internal:8082/"
            request_timeout_secs = 5
            "#,
        )
        .unwrap();
        let mut cfg = cfg;
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.port, 9090);
        // trailing slash is stripped
        assert_eq!(cfg.user_service.base_url, "http://users.internal:8082");
        assert_eq!(cfg.user_service.request_timeout_secs, 5);
    }

    #[test]
    fn rejects_missing_base_url() {
        let mut cfg = AppConfig::default();
        std::env::remove_var("USER_SERVICE_URL");
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_port_zero() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        cfg.user_service.base_url = "http://users.internal:8082".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut cfg = AppConfig::default();
        cfg.user_service.base_url = "ftp://users".into();
        assert!(cfg.normalize_and_validate().is_err());
    }
}
