#![allow(dead_code)]
use async_trait::async_trait;
use dnslink_router_application::ports::{Clock, TxtLookup};
use dnslink_router_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// In-memory TXT lookup that counts how often it is asked.
#[derive(Default)]
pub struct MockTxtLookup {
    records: Mutex<HashMap<String, Vec<String>>>,
    failures: Mutex<HashMap<String, DomainError>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    names: Mutex<Vec<String>>,
}

impl MockTxtLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(self, name: &str, records: &[&str]) -> Self {
        self.records.lock().unwrap().insert(
            name.to_string(),
            records.iter().map(|r| r.to_string()).collect(),
        );
        self
    }

    pub fn with_failure(self, name: &str, error: DomainError) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(name.to_string(), error);
        self
    }

    /// Every lookup sleeps this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_records(&self, name: &str, records: &[&str]) {
        self.failures.lock().unwrap().remove(name);
        self.records.lock().unwrap().insert(
            name.to_string(),
            records.iter().map(|r| r.to_string()).collect(),
        );
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }
}

#[async_trait]
impl TxtLookup for MockTxtLookup {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.names.lock().unwrap().push(name.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.failures.lock().unwrap().get(name) {
            return Err(error.clone());
        }

        self.records
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::DnsLinkNotFound(name.to_string()))
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    start: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        })
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + *self.offset.lock().unwrap()
    }
}
