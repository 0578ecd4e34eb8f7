use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Load `.env` if present, then read `BIND_HOST` and `PORT` from the environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::build(|key| std::env::var(key).ok())
    }

    fn build(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: env("BIND_HOST", "0.0.0.0")
                .parse()
                .context("BIND_HOST must be a valid IP address")?,
            port: env("PORT", "5000")
                .parse()
                .context("PORT must be a valid u16")?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
