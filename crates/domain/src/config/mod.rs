//! Configuration module for the DNSLink router
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `routing`: Prefix → upstream table, replacements and cache TTL
//! - `resolver`: Nameservers used for DNSLink TXT lookups
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod routing;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use routing::{ProxyRule, RoutingConfig};
