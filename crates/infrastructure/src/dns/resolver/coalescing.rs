use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use dnslink_router_application::ports::LinkResolver;
use dnslink_router_domain::{DomainError, ResolvedLink};
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::debug;

type Resolution = Result<Option<ResolvedLink>, DomainError>;
type Waiters = Vec<oneshot::Sender<Resolution>>;

/// Single-flight decorator: concurrent calls for the same host share one
/// inner lookup.
///
/// The first caller for a host runs the lookup; later callers park on a
/// oneshot until it finishes. If the leading call is dropped mid-flight its
/// waiters fall back to their own lookup.
pub struct CoalescingLinkResolver {
    inner: Arc<dyn LinkResolver>,
    inflight: DashMap<Arc<str>, Waiters, FxBuildHasher>,
}

impl CoalescingLinkResolver {
    pub fn new(inner: Arc<dyn LinkResolver>) -> Self {
        Self {
            inner,
            inflight: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Hosts with a lookup currently in progress.
    pub fn inflight_count(&self) -> usize {
        self.inflight.len()
    }
}

/// Clears the in-flight slot even when the leading future is cancelled.
struct InflightGuard<'a> {
    inflight: &'a DashMap<Arc<str>, Waiters, FxBuildHasher>,
    host: Option<Arc<str>>,
}

impl InflightGuard<'_> {
    fn finish(mut self) -> Waiters {
        self.host
            .take()
            .and_then(|host| self.inflight.remove(&host))
            .map(|(_, waiters)| waiters)
            .unwrap_or_default()
    }
}

impl Drop for InflightGuard<'_> {
    fn drop(&mut self) {
        if let Some(host) = self.host.take() {
            self.inflight.remove(&host);
        }
    }
}

#[async_trait]
impl LinkResolver for CoalescingLinkResolver {
    async fn resolve(&self, host: &str) -> Result<Option<ResolvedLink>, DomainError> {
        let key: Arc<str> = Arc::from(host);

        let waiter = match self.inflight.entry(Arc::clone(&key)) {
            Entry::Occupied(mut slot) => {
                let (tx, rx) = oneshot::channel();
                slot.get_mut().push(tx);
                Some(rx)
            }
            Entry::Vacant(slot) => {
                slot.insert(Vec::new());
                None
            }
        };

        if let Some(rx) = waiter {
            debug!(host = %host, "Joining in-flight DNSLink lookup");
            return match rx.await {
                Ok(resolution) => resolution,
                Err(_) => self.inner.resolve(host).await,
            };
        }

        let guard = InflightGuard {
            inflight: &self.inflight,
            host: Some(key),
        };
        let resolution = self.inner.resolve(host).await;

        let waiters = guard.finish();
        if !waiters.is_empty() {
            debug!(host = %host, waiters = waiters.len(), "Sharing DNSLink lookup result");
        }
        for tx in waiters {
            let _ = tx.send(resolution.clone());
        }
        resolution
    }
}
