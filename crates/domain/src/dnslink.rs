use std::fmt;
use std::sync::Arc;

/// Literal token every DNSLink TXT record starts with.
pub const DNSLINK_PREFIX: &str = "dnslink=";

/// Label prepended to a host to find its DNSLink TXT records.
pub const DNSLINK_SUBDOMAIN: &str = "_dnslink.";

/// Name to query for the DNSLink TXT records of `host`.
pub fn dnslink_query_name(host: &str) -> String {
    let mut name = String::with_capacity(DNSLINK_SUBDOMAIN.len() + host.len());
    name.push_str(DNSLINK_SUBDOMAIN);
    name.push_str(host);
    name
}

/// A DNSLink chosen for a host.
///
/// Uses `Arc<str>` so cached links are handed out without copying strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedLink {
    /// Addressing scheme, e.g. `ipfs` or `swarm`. Never starts with `/`.
    pub namespace: Arc<str>,
    /// Content address, possibly followed by a sub-path.
    pub identifier: Arc<str>,
}

impl ResolvedLink {
    pub fn new(namespace: impl Into<Arc<str>>, identifier: impl Into<Arc<str>>) -> Self {
        Self {
            namespace: namespace.into(),
            identifier: identifier.into(),
        }
    }

    /// Parse a single link value of the form `/<namespace>/<identifier...>`.
    pub fn parse(value: &str) -> Option<Self> {
        parse_link_value(value).map(|(ns, id)| Self::new(ns, id))
    }
}

impl fmt::Display for ResolvedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.namespace, self.identifier)
    }
}

/// DNSLink entries extracted from the TXT records of one name.
///
/// Namespaces keep the order in which they were first seen, and so do the
/// identifiers inside each namespace. DNS does not guarantee record order, so
/// two answers for the same name may list namespaces differently; callers that
/// pick "the first" namespace inherit that instability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsLinkRecords {
    links: Vec<(Arc<str>, Vec<Arc<str>>)>,
}

impl DnsLinkRecords {
    /// Parse raw TXT strings, silently skipping anything that is not a
    /// well-formed `dnslink=/<namespace>/<identifier>` record.
    pub fn parse<S: AsRef<str>>(records: &[S]) -> Self {
        let mut parsed = Self::default();

        for record in records {
            let Some(value) = record.as_ref().strip_prefix(DNSLINK_PREFIX) else {
                continue;
            };
            if let Some((namespace, identifier)) = parse_link_value(value) {
                parsed.push(namespace, identifier);
            }
        }

        parsed
    }

    fn push(&mut self, namespace: &str, identifier: &str) {
        let identifier: Arc<str> = Arc::from(identifier);
        match self
            .links
            .iter_mut()
            .find(|(ns, _)| ns.as_ref() == namespace)
        {
            Some((_, ids)) => ids.push(identifier),
            None => self.links.push((Arc::from(namespace), vec![identifier])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Number of distinct namespaces.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|(ns, _)| ns.as_ref())
    }

    pub fn identifiers(&self, namespace: &str) -> Option<&[Arc<str>]> {
        self.links
            .iter()
            .find(|(ns, _)| ns.as_ref() == namespace)
            .map(|(_, ids)| ids.as_slice())
    }

    /// First namespace (in iteration order) with at least one identifier,
    /// paired with its first identifier.
    ///
    /// This is a tie-break, not a ranking: with several namespaces published
    /// the winner depends on the record order of the DNS answer.
    pub fn first_link(&self) -> Option<ResolvedLink> {
        self.links.iter().find_map(|(ns, ids)| {
            ids.first().map(|id| ResolvedLink {
                namespace: Arc::clone(ns),
                identifier: Arc::clone(id),
            })
        })
    }
}

/// Split `/<namespace>/<identifier...>` into its two parts.
///
/// Surrounding whitespace is ignored. Both parts must be non-empty; the
/// identifier keeps any further `/` separators and trailing slash verbatim.
fn parse_link_value(value: &str) -> Option<(&str, &str)> {
    let rest = value.trim().strip_prefix('/')?;
    let (namespace, identifier) = rest.split_once('/')?;
    if namespace.is_empty() || identifier.is_empty() {
        return None;
    }
    Some((namespace, identifier))
}
