use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::errors::ConfigError;

const DEFAULT_DNS_PORT: u16 = 53;

/// Nameservers used to look up `_dnslink.<host>` TXT records
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Tried in order; "ip" or "ip:port" (port defaults to 53)
    #[serde(default = "default_nameservers")]
    pub nameservers: Vec<String>,

    /// Per-server timeout in milliseconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Retry truncated UDP answers over TCP
    #[serde(default = "default_true")]
    pub tcp_fallback: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nameservers: default_nameservers(),
            query_timeout: default_query_timeout(),
            tcp_fallback: true,
        }
    }
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout)
    }

    pub fn socket_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.nameservers
            .iter()
            .map(|server| parse_nameserver(server))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nameservers.is_empty() {
            return Err(ConfigError::Validation(
                "at least one nameserver is required".to_string(),
            ));
        }
        if self.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "query_timeout must be greater than zero".to_string(),
            ));
        }
        self.socket_addrs().map(|_| ())
    }
}

fn parse_nameserver(server: &str) -> Result<SocketAddr, ConfigError> {
    let server = server.trim();
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    server
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| ConfigError::Validation(format!("invalid nameserver address '{server}'")))
}

fn default_nameservers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string(), "1.1.1.1:53".to_string()]
}

fn default_query_timeout() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}
