pub mod domain;
pub mod export;
pub mod query;
pub mod storage;

pub mod config {
    use anyhow::Context;
    use std::path::PathBuf;

    use crate::storage::layout::DataLayout;

    pub const DEFAULT_PORT: u16 = 5000;
    pub const DEFAULT_DATA_DIR: &str = "data";

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub api_key: Option<String>,
        pub data_dir: PathBuf,
        pub port: u16,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let port = match std::env::var("PORT") {
                Ok(v) => v
                    .trim()
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number (got {v:?})"))?,
                Err(_) => DEFAULT_PORT,
            };

            let data_dir = std::env::var("DATA_DIR")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());

            Ok(Self {
                api_key: std::env::var("API_KEY").ok(),
                data_dir: PathBuf::from(data_dir),
                port,
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }

        /// The shared secret, if one is configured. An empty value counts as unset.
        pub fn api_key(&self) -> Option<&str> {
            self.api_key.as_deref().filter(|k| !k.is_empty())
        }

        pub fn layout(&self) -> DataLayout {
            DataLayout::new(self.data_dir.clone())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn empty_api_key_counts_as_unset() {
            let settings = Settings {
                api_key: Some(String::new()),
                data_dir: PathBuf::from(DEFAULT_DATA_DIR),
                port: DEFAULT_PORT,
                sentry_dsn: None,
            };
            assert_eq!(settings.api_key(), None);
        }
    }
}
