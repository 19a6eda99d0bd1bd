//! Server Configuration

use std::env;
use std::net::{AddrParseError, SocketAddr};

pub const BIND_ADDR_ENV: &str = "BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AddrParseError> {
        let raw = env::var(BIND_ADDR_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Self::parse(&raw)
    }

    fn parse(raw: &str) -> Result<Self, AddrParseError> {
        Ok(Self {
            bind_addr: raw.trim().parse()?,
        })
    }
}
