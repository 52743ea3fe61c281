use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No DNSLink published for {0}")]
    DnsLinkNotFound(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("DNS lookup timed out (server {server})")]
    LookupTimeout { server: String },

    #[error("DNS lookup failed: {0}")]
    LookupFailed(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// True for the normal negative outcome: the name exists (or not) but
    /// carries no DNSLink. Everything else is a transient lookup failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::DnsLinkNotFound(_))
    }
}
