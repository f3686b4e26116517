#[derive(Debug)]
pub struct Config {
    pub api_base_url: String,
}

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

impl Config {
    pub fn load() -> Self {
        let api_base_url =
            std::env::var("CATALOG_API_BASE").unwrap_or(DEFAULT_API_BASE_URL.into());
        Config { api_base_url }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.is_empty() {
            return Err("CATALOG_API_BASE is empty".into());
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(format!(
                "CATALOG_API_BASE is not an http(s) URL: {}",
                self.api_base_url
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_validates() {
        let config = Config {
            api_base_url: DEFAULT_API_BASE_URL.into(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let config = Config {
            api_base_url: "ftp://example.com".into(),
        };
        assert!(config.validate().is_err());
    }
}
