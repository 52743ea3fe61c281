use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

use super::errors::ConfigError;
use crate::routing::{RoutingRule, DEFAULT_CACHE_TTL};

/// One `prefix → upstream` proxy entry
///
/// ```toml
/// [[routing.proxies]]
/// prefix = "/swarm"
/// replacement = "/bzz"
/// upstream = "http://varnish:8080"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProxyRule {
    /// Routing prefix, `/` followed by a DNSLink namespace (e.g. "/ipfs")
    pub prefix: String,

    /// Optional base path that replaces the prefix when rewriting
    #[serde(default)]
    pub replacement: Option<String>,

    /// Upstream address; an `http://` or `https://` scheme is dropped
    pub upstream: String,
}

impl ProxyRule {
    /// Upstream dial address with any HTTP scheme removed.
    pub fn upstream_address(&self) -> &str {
        let upstream = self.upstream.trim();
        upstream
            .strip_prefix("http://")
            .or_else(|| upstream.strip_prefix("https://"))
            .unwrap_or(upstream)
    }
}

/// Routing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoutingConfig {
    /// DNSLink cache TTL in seconds (0 = default of 60s)
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u64,

    /// Share one in-flight lookup between concurrent requests for the same host
    #[serde(default)]
    pub coalesce_lookups: bool,

    #[serde(default)]
    pub proxies: Vec<ProxyRule>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            cache_ttl: default_cache_ttl(),
            coalesce_lookups: false,
            proxies: vec![],
        }
    }
}

impl RoutingConfig {
    pub fn cache_ttl(&self) -> Duration {
        if self.cache_ttl == 0 {
            DEFAULT_CACHE_TTL
        } else {
            Duration::from_secs(self.cache_ttl)
        }
    }

    /// Build the read-only table consumed by the routing engine.
    pub fn to_rule(&self) -> RoutingRule {
        self.proxies
            .iter()
            .fold(RoutingRule::new(self.cache_ttl()), |rule, proxy| {
                let rule = rule.with_upstream(proxy.prefix.clone(), proxy.upstream_address());
                match proxy.replacement.as_deref() {
                    Some(replacement) if !replacement.is_empty() => {
                        rule.with_replacement(proxy.prefix.clone(), replacement)
                    }
                    _ => rule,
                }
            })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::with_capacity(self.proxies.len());

        for proxy in &self.proxies {
            if !proxy.prefix.starts_with('/') || proxy.prefix.len() < 2 {
                return Err(ConfigError::Validation(format!(
                    "proxy prefix '{}' must be '/' followed by a namespace",
                    proxy.prefix
                )));
            }
            if proxy.prefix[1..].contains('/') {
                return Err(ConfigError::Validation(format!(
                    "proxy prefix '{}' must be a single path segment",
                    proxy.prefix
                )));
            }
            if !seen.insert(proxy.prefix.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate proxy prefix '{}'",
                    proxy.prefix
                )));
            }
            if proxy.upstream_address().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "proxy prefix '{}' has an empty upstream",
                    proxy.prefix
                )));
            }
        }

        Ok(())
    }
}

fn default_cache_ttl() -> u64 {
    DEFAULT_CACHE_TTL.as_secs()
}
