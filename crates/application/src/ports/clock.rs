use std::time::Instant;

/// Time source for cache expiry.
///
/// Monotonic rather than wall-clock: a system clock step must not shorten or
/// extend the life of a cached entry. Injected so TTL behaviour can be driven
/// deterministically in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}
