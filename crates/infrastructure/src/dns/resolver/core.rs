use async_trait::async_trait;
use dnslink_router_application::ports::{LinkResolver, TxtLookup};
use dnslink_router_domain::{dnslink_query_name, DnsLinkRecords, DomainError, ResolvedLink};
use std::sync::Arc;
use tracing::debug;

/// Innermost resolver: one TXT lookup, no caching.
pub struct CoreLinkResolver {
    lookup: Arc<dyn TxtLookup>,
}

impl CoreLinkResolver {
    pub fn new(lookup: Arc<dyn TxtLookup>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl LinkResolver for CoreLinkResolver {
    async fn resolve(&self, host: &str) -> Result<Option<ResolvedLink>, DomainError> {
        let name = dnslink_query_name(host);

        let records = match self.lookup.lookup_txt(&name).await {
            Ok(records) => records,
            Err(e) if e.is_not_found() => {
                debug!(host = %host, "No DNSLink TXT records");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let links = DnsLinkRecords::parse(&records);
        if links.len() > 1 {
            // Record order is whatever the server returned; so is the winner.
            debug!(
                host = %host,
                namespaces = ?links.namespaces().collect::<Vec<_>>(),
                "Multiple DNSLink namespaces published, using the first"
            );
        }

        let link = links.first_link();
        match &link {
            Some(link) => debug!(host = %host, link = %link, "DNSLink resolved"),
            None => debug!(
                host = %host,
                records = records.len(),
                "TXT records present but none is a valid DNSLink"
            ),
        }
        Ok(link)
    }
}
