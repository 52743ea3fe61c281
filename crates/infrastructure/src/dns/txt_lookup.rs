use super::forwarding::{TxtQueryBuilder, TxtResponse, TxtResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use dnslink_router_application::ports::TxtLookup;
use dnslink_router_domain::{ConfigError, DomainError, ResolverConfig};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// TXT lookups against a fixed list of nameservers over raw UDP, with TCP
/// retry for truncated answers.
///
/// Servers are tried in order. An authoritative "nothing here" answer ends the
/// lookup; failures move on to the next server.
pub struct HickoryTxtLookup {
    nameservers: Vec<SocketAddr>,
    timeout: Duration,
    tcp_fallback: bool,
}

impl HickoryTxtLookup {
    pub fn new(nameservers: Vec<SocketAddr>, timeout: Duration) -> Self {
        Self {
            nameservers,
            timeout,
            tcp_fallback: true,
        }
    }

    pub fn with_tcp_fallback(mut self, enabled: bool) -> Self {
        self.tcp_fallback = enabled;
        self
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, ConfigError> {
        let nameservers = config.socket_addrs()?;
        info!(
            nameservers = ?nameservers,
            timeout_ms = config.query_timeout,
            tcp_fallback = config.tcp_fallback,
            "TXT lookup configured"
        );
        Ok(Self::new(nameservers, config.timeout()).with_tcp_fallback(config.tcp_fallback))
    }

    pub fn nameservers(&self) -> &[SocketAddr] {
        &self.nameservers
    }

    async fn query_server(
        &self,
        server: SocketAddr,
        name: &str,
        query_id: u16,
        query: &[u8],
    ) -> Result<Vec<String>, DomainError> {
        let mut parsed = self.exchange(Transport::udp(server), query_id, query).await?;

        if parsed.truncated && self.tcp_fallback {
            debug!(server = %server, name = %name, "Truncated UDP answer, retrying over TCP");
            parsed = self.exchange(Transport::tcp(server), query_id, query).await?;
        }

        // An incomplete answer says nothing about whether a DNSLink exists.
        if parsed.truncated && parsed.records.is_empty() {
            return Err(DomainError::InvalidDnsResponse(format!(
                "truncated answer from {} for {}",
                server, name
            )));
        }

        parsed.into_records(name, &server.to_string())
    }

    async fn exchange(
        &self,
        transport: Transport,
        query_id: u16,
        query: &[u8],
    ) -> Result<TxtResponse, DomainError> {
        let response = transport.send(query, self.timeout).await?;
        let parsed = TxtResponseParser::parse(&response.bytes)?;

        if parsed.id != query_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} response ID {} does not match query ID {}",
                transport.protocol_name(),
                parsed.id,
                query_id
            )));
        }

        debug!(
            protocol = response.protocol_used,
            bytes = response.bytes.len(),
            "TXT answer received"
        );
        Ok(parsed)
    }
}

#[async_trait]
impl TxtLookup for HickoryTxtLookup {
    #[instrument(skip(self), level = "debug")]
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DomainError> {
        let (query_id, query) = TxtQueryBuilder::build(name)?;
        let mut last_error = None;

        for &server in &self.nameservers {
            match self.query_server(server, name, query_id, &query).await {
                Ok(records) => {
                    debug!(server = %server, records = records.len(), "TXT lookup answered");
                    return Ok(records);
                }
                Err(e @ (DomainError::DnsLinkNotFound(_) | DomainError::InvalidDomainName(_))) => {
                    return Err(e);
                }
                Err(e) => {
                    debug!(
                        server = %server,
                        name = %name,
                        error = %e,
                        "TXT lookup failed, trying next nameserver"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            DomainError::LookupFailed(format!("no nameservers configured for {}", name))
        }))
    }
}
