use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub sleep_interval_secs: u64,
}

impl ClientConfig {
    /// Load config from a specific .env file, or the default `.env` if None.
    pub fn from_env_file(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => {
                dotenvy::from_filename(p).with_context(|| format!("failed to load {p}"))?;
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }
        Self::build(|key| std::env::var(key).ok())
    }

    fn build(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw = lookup("SLEEP_INTERVAL_SECS").unwrap_or_else(|| "10".to_string());
        let sleep_interval_secs: u64 = raw
            .parse()
            .with_context(|| format!("SLEEP_INTERVAL_SECS must be a valid u64, got {raw:?}"))?;
        if sleep_interval_secs == 0 {
            bail!("SLEEP_INTERVAL_SECS must be greater than zero");
        }

        Ok(Self { sleep_interval_secs })
    }
}
