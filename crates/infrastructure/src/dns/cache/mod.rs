// DNSLink resolution cache

pub mod clock;
pub mod entry;
pub mod metrics;
pub mod storage;

pub use clock::SystemClock;
pub use entry::{CacheEntry, CachedLink};
pub use metrics::{CacheMetrics, CacheStats};
pub use storage::LinkCache;
