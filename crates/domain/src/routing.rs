use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::dnslink::ResolvedLink;

/// Cache TTL applied when the configured one is zero.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Outcome of routing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Hand the request to the next handler unchanged.
    NoMatch,
    /// Forward to `upstream` with the path replaced by `rewritten_path`.
    Matched {
        upstream: Arc<str>,
        rewritten_path: String,
    },
}

impl RoutingDecision {
    pub fn is_match(&self) -> bool {
        matches!(self, RoutingDecision::Matched { .. })
    }
}

/// Static routing table, read-only once built.
///
/// Replacement entries whose prefix has no upstream are tolerated; they are
/// never consulted because the upstream lookup fails first.
#[derive(Debug, Clone)]
pub struct RoutingRule {
    prefix_to_upstream: HashMap<String, Arc<str>>,
    prefix_to_replacement: HashMap<String, String>,
    cache_ttl: Duration,
}

impl RoutingRule {
    pub fn new(cache_ttl: Duration) -> Self {
        Self {
            prefix_to_upstream: HashMap::new(),
            prefix_to_replacement: HashMap::new(),
            cache_ttl,
        }
    }

    pub fn with_upstream(
        mut self,
        prefix: impl Into<String>,
        upstream: impl Into<Arc<str>>,
    ) -> Self {
        self.prefix_to_upstream.insert(prefix.into(), upstream.into());
        self
    }

    pub fn with_replacement(
        mut self,
        prefix: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.prefix_to_replacement
            .insert(prefix.into(), replacement.into());
        self
    }

    pub fn upstream_for(&self, prefix: &str) -> Option<&Arc<str>> {
        self.prefix_to_upstream.get(prefix)
    }

    pub fn replacement_for(&self, prefix: &str) -> Option<&str> {
        self.prefix_to_replacement.get(prefix).map(String::as_str)
    }

    /// Configured prefixes with their upstreams, sorted by prefix.
    pub fn upstreams(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .prefix_to_upstream
            .iter()
            .map(|(prefix, upstream)| (prefix.as_str(), upstream.as_ref()))
            .collect();
        entries.sort_unstable();
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.prefix_to_upstream.is_empty()
    }

    /// Effective TTL: `DEFAULT_CACHE_TTL` when the configured value is zero.
    pub fn cache_ttl(&self) -> Duration {
        if self.cache_ttl.is_zero() {
            DEFAULT_CACHE_TTL
        } else {
            self.cache_ttl
        }
    }

    /// Match a resolved link against the table and rewrite the path.
    ///
    /// The prefix is derived from the DNS namespace only, never from the
    /// request, and must equal a configured prefix exactly.
    pub fn route(&self, link: &ResolvedLink, original_path: &str) -> RoutingDecision {
        if link.namespace.is_empty() {
            return RoutingDecision::NoMatch;
        }

        let prefix = prefix_for(&link.namespace);
        let Some(upstream) = self.upstream_for(&prefix) else {
            return RoutingDecision::NoMatch;
        };

        let replacement = self.replacement_for(&prefix).unwrap_or_default();
        RoutingDecision::Matched {
            upstream: Arc::clone(upstream),
            rewritten_path: build_path(
                &link.namespace,
                &link.identifier,
                replacement,
                original_path,
            ),
        }
    }
}

impl Default for RoutingRule {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

/// Routing key for a namespace: `"/" + namespace`.
pub fn prefix_for(namespace: &str) -> String {
    let mut prefix = String::with_capacity(namespace.len() + 1);
    prefix.push('/');
    prefix.push_str(namespace);
    prefix
}

/// Rewrite `original_path` to live under the resolved content address.
///
/// `replacement` replaces `/<namespace>` as the base when non-empty. A
/// replacement without a leading slash is used as-is. Exactly one leading `/`
/// is removed from the original path; further slashes and any query-like
/// text are kept verbatim.
///
/// ```
/// use dnslink_router_domain::build_path;
///
/// assert_eq!(build_path("swarm", "abc123", "/bzz", "/index.html"), "/bzz/abc123/index.html");
/// assert_eq!(build_path("ipfs", "QmXyz789", "", "/"), "/ipfs/QmXyz789/");
/// ```
pub fn build_path(
    namespace: &str,
    identifier: &str,
    replacement: &str,
    original_path: &str,
) -> String {
    let identifier = identifier.strip_suffix('/').unwrap_or(identifier);
    let original = original_path.strip_prefix('/').unwrap_or(original_path);

    let capacity = replacement.len() + namespace.len() + identifier.len() + original.len() + 3;
    let mut path = String::with_capacity(capacity);

    if replacement.is_empty() {
        path.push('/');
        path.push_str(namespace);
    } else {
        path.push_str(replacement);
    }
    if !path.ends_with('/') {
        path.push('/');
    }

    path.push_str(identifier);
    if !path.ends_with('/') {
        path.push('/');
    }

    path.push_str(original);
    path
}

/// Canonical cache key for a request host.
///
/// Drops a `:port` suffix (bracketed IPv6 included), a trailing root dot, and
/// folds ASCII case.
pub fn normalize_host(host: &str) -> String {
    let host = strip_port(host.trim());
    let host = host.strip_suffix('.').unwrap_or(host);
    host.to_ascii_lowercase()
}

fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        return match rest.split_once(']') {
            Some((addr, tail)) if tail.is_empty() || is_port_suffix(tail) => addr,
            _ => host,
        };
    }

    match host.rsplit_once(':') {
        // More than one colon without brackets is a bare IPv6 literal.
        Some((name, _)) if name.contains(':') => host,
        Some((name, port)) if port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}

fn is_port_suffix(tail: &str) -> bool {
    tail.strip_prefix(':')
        .is_some_and(|port| port.bytes().all(|b| b.is_ascii_digit()))
}
