use dnslink_router_application::ports::LinkResolver;
use dnslink_router_application::use_cases::DecideRouteUseCase;
use dnslink_router_domain::Config;
use dnslink_router_infrastructure::dns::{HickoryTxtLookup, LinkCache, ResolverBuilder};
use std::sync::Arc;

/// Everything the subcommands need, built once from the configuration.
pub struct Services {
    pub cache: Arc<LinkCache>,
    pub resolver: Arc<dyn LinkResolver>,
    pub decide_route: DecideRouteUseCase,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let rules = Arc::new(config.routing.to_rule());
        let lookup = Arc::new(HickoryTxtLookup::from_config(&config.resolver)?);
        let cache = Arc::new(LinkCache::new(rules.cache_ttl()));

        let resolver = ResolverBuilder::new(lookup)
            .with_cache(Arc::clone(&cache))
            .with_coalescing(config.routing.coalesce_lookups)
            .build();

        Ok(Self {
            cache,
            decide_route: DecideRouteUseCase::new(Arc::clone(&resolver), rules),
            resolver,
        })
    }
}
