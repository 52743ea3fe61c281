#![allow(dead_code)]

use async_trait::async_trait;
use dnslink_router_application::ports::LinkResolver;
use dnslink_router_domain::{DomainError, ResolvedLink};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock LinkResolver
// ============================================================================

#[derive(Clone, Default)]
pub struct MockLinkResolver {
    links: Arc<Mutex<HashMap<String, ResolvedLink>>>,
    failures: Arc<Mutex<HashMap<String, DomainError>>>,
    requested: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl MockLinkResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `/<namespace>/<identifier>` for `host`
    pub fn with_link(self, host: &str, namespace: &str, identifier: &str) -> Self {
        self.links
            .lock()
            .unwrap()
            .insert(host.to_string(), ResolvedLink::new(namespace, identifier));
        self
    }

    /// Makes lookups for `host` fail with `error`
    pub fn with_failure(self, host: &str, error: DomainError) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(host.to_string(), error);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Hosts passed to `resolve`, in call order
    pub fn requested_hosts(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl LinkResolver for MockLinkResolver {
    async fn resolve(&self, host: &str) -> Result<Option<ResolvedLink>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(host.to_string());

        if let Some(error) = self.failures.lock().unwrap().get(host) {
            return Err(error.clone());
        }
        Ok(self.links.lock().unwrap().get(host).cloned())
    }
}
