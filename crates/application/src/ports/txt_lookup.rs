use async_trait::async_trait;
use dnslink_router_domain::DomainError;

/// DNS TXT query capability.
///
/// Implementations own transport, timeouts and retries. They must report a
/// name without TXT data as `DomainError::DnsLinkNotFound` so callers can tell
/// a normal negative answer apart from a failed lookup.
#[async_trait]
pub trait TxtLookup: Send + Sync {
    /// Raw TXT strings published at `name`, one entry per record.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DomainError>;
}
