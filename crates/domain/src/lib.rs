//! DNSLink Router Domain Layer
pub mod config;
pub mod dnslink;
pub mod errors;
pub mod routing;

pub use config::{
    CliOverrides, Config, ConfigError, LogFormat, LoggingConfig, ProxyRule, ResolverConfig,
    RoutingConfig,
};
pub use dnslink::{
    dnslink_query_name, DnsLinkRecords, ResolvedLink, DNSLINK_PREFIX, DNSLINK_SUBDOMAIN,
};
pub use errors::DomainError;
pub use routing::{
    build_path, normalize_host, prefix_for, RoutingDecision, RoutingRule, DEFAULT_CACHE_TTL,
};
