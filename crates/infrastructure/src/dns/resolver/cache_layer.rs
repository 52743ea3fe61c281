use super::super::cache::LinkCache;
use async_trait::async_trait;
use dnslink_router_application::ports::LinkResolver;
use dnslink_router_domain::{DomainError, ResolvedLink};
use std::sync::Arc;
use tracing::debug;

/// Cache decorator for DNSLink resolvers
///
/// Fresh entries short-circuit the inner resolver. Both "link" and "no link"
/// outcomes are cached for the full TTL; lookup failures are not cached, so
/// the next request for the host tries again.
pub struct CachedLinkResolver {
    inner: Arc<dyn LinkResolver>,
    cache: Arc<LinkCache>,
}

impl CachedLinkResolver {
    pub fn new(inner: Arc<dyn LinkResolver>, cache: Arc<LinkCache>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl LinkResolver for CachedLinkResolver {
    async fn resolve(&self, host: &str) -> Result<Option<ResolvedLink>, DomainError> {
        if let Some(cached) = self.cache.get(host) {
            debug!(host = %host, negative = cached.is_negative(), "Cache HIT");
            return Ok(cached.into_link());
        }

        debug!(host = %host, "Cache MISS");

        match self.inner.resolve(host).await {
            Ok(link) => {
                self.cache.insert(host, link.clone());
                Ok(link)
            }
            Err(e) => {
                debug!(host = %host, error = %e, "Lookup failed, not caching");
                Err(e)
            }
        }
    }
}
