use dnslink_router_domain::{normalize_host, RoutingDecision, RoutingRule};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::LinkResolver;

/// Decides where a request goes based on the DNSLink of its host.
///
/// Fails open: lookup errors, hosts without a DNSLink and namespaces without a
/// configured upstream all produce `RoutingDecision::NoMatch`. Nothing here
/// retries; retries belong to the TXT lookup behind the resolver.
pub struct DecideRouteUseCase {
    resolver: Arc<dyn LinkResolver>,
    rules: Arc<RoutingRule>,
}

impl DecideRouteUseCase {
    pub fn new(resolver: Arc<dyn LinkResolver>, rules: Arc<RoutingRule>) -> Self {
        Self { resolver, rules }
    }

    #[instrument(skip(self), fields(host = %host, path = %original_path))]
    pub async fn execute(&self, host: &str, original_path: &str) -> RoutingDecision {
        let host = normalize_host(host);
        if host.is_empty() {
            return RoutingDecision::NoMatch;
        }

        let link = match self.resolver.resolve(&host).await {
            Ok(Some(link)) => link,
            Ok(None) => {
                debug!(host = %host, "No DNSLink published");
                return RoutingDecision::NoMatch;
            }
            Err(e) => {
                debug!(host = %host, error = %e, "DNSLink lookup failed, passing through");
                return RoutingDecision::NoMatch;
            }
        };

        let decision = self.rules.route(&link, original_path);
        match &decision {
            RoutingDecision::Matched {
                upstream,
                rewritten_path,
            } => debug!(
                host = %host,
                namespace = %link.namespace,
                identifier = %link.identifier,
                upstream = %upstream,
                rewritten_path = %rewritten_path,
                "DNSLink match"
            ),
            RoutingDecision::NoMatch => debug!(
                host = %host,
                namespace = %link.namespace,
                "No upstream configured for namespace"
            ),
        }
        decision
    }
}
