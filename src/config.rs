//! Runtime configuration
//!
//! Read from environment variables:
//! - `PORT`: listen port (default 3000)
//! - `BIND_ADDR`: listen address (default 0.0.0.0)
//! - `EMISSION_FACTORS`: optional path to a JSON factor table; the built-in
//!   reference table is used when unset

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::factors::EmissionFactorTable;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub factors_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            factors_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let bind_addr = lookup("BIND_ADDR")
            .and_then(|a| a.parse().ok())
            .unwrap_or(defaults.bind_addr);

        let factors_path = lookup("EMISSION_FACTORS")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self {
            bind_addr,
            port,
            factors_path,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Load the configured factor table, or the reference table
    pub fn load_table(&self) -> Result<EmissionFactorTable> {
        match &self.factors_path {
            Some(path) => EmissionFactorTable::load(path)
                .with_context(|| format!("Failed to load emission factors from {:?}", path)),
            None => Ok(EmissionFactorTable::reference()),
        }
    }
}
