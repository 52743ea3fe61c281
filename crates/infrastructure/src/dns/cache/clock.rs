use dnslink_router_application::ports::Clock;
use std::time::Instant;

/// Production clock backed by `Instant::now()`.
///
/// Monotonic, so a wall-clock step never resurrects or prematurely expires an
/// entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}
