pub mod cache;
pub mod forwarding;
pub mod resolver;
pub mod transport;
pub mod txt_lookup;

pub use cache::{CacheStats, CachedLink, LinkCache, SystemClock};
pub use resolver::{CachedLinkResolver, CoalescingLinkResolver, CoreLinkResolver, ResolverBuilder};
pub use txt_lookup::HickoryTxtLookup;
