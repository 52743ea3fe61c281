use super::super::cache::LinkCache;
use super::cache_layer::CachedLinkResolver;
use super::coalescing::CoalescingLinkResolver;
use super::core::CoreLinkResolver;
use dnslink_router_application::ports::{LinkResolver, TxtLookup};
use std::sync::Arc;
use tracing::info;

pub struct ResolverBuilder {
    lookup: Arc<dyn TxtLookup>,
    cache: Option<Arc<LinkCache>>,
    coalesce: bool,
}

impl ResolverBuilder {
    pub fn new(lookup: Arc<dyn TxtLookup>) -> Self {
        Self {
            lookup,
            cache: None,
            coalesce: false,
        }
    }

    pub fn with_cache(mut self, cache: Arc<LinkCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_coalescing(mut self, enabled: bool) -> Self {
        self.coalesce = enabled;
        self
    }

    /// Compose core → coalescing (optional) → cache.
    pub fn build(self) -> Arc<dyn LinkResolver> {
        info!(
            cache = self.cache.is_some(),
            coalesce = self.coalesce,
            "Building DNSLink resolver"
        );

        let mut resolver: Arc<dyn LinkResolver> = Arc::new(CoreLinkResolver::new(self.lookup));

        if self.coalesce {
            resolver = Arc::new(CoalescingLinkResolver::new(resolver));
        }

        if let Some(cache) = self.cache {
            resolver = Arc::new(CachedLinkResolver::new(resolver, cache));
        }

        resolver
    }
}
