// ⚙️ Server Configuration
// Content is compiled in; the only runtime knob is where to listen.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

pub const ENV_ADDR: &str = "PORTFOLIO_ADDR";
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read `PORTFOLIO_ADDR`, falling back to 0.0.0.0:3000
    pub fn from_env() -> Result<Self> {
        Self::from_value(env::var(ENV_ADDR).ok().as_deref())
    }

    /// Parse an optional address; blank counts as unset
    pub fn from_value(raw: Option<&str>) -> Result<Self> {
        let value = match raw.map(str::trim) {
            Some(v) if !v.is_empty() => v,
            _ => DEFAULT_ADDR,
        };

        let addr = value
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid {} value: {:?}", ENV_ADDR, value))?;

        Ok(ServerConfig { addr })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}
