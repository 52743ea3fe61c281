use async_trait::async_trait;
use dnslink_router_domain::{DomainError, ResolvedLink};

/// Resolves a (normalized) host to the DNSLink it publishes.
///
/// `Ok(None)` is the "no DNSLink" outcome. `Err` is reserved for failed
/// lookups, which callers treat as pass-through for the current request.
#[async_trait]
pub trait LinkResolver: Send + Sync {
    async fn resolve(&self, host: &str) -> Result<Option<ResolvedLink>, DomainError>;
}
