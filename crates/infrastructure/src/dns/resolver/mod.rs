//! DNSLink resolver module with Decorator Pattern
//!
//! Each decorator adds a specific responsibility:
//!
//! - **Cache**: TTL memoization of positive and negative outcomes (outermost)
//! - **Coalescing**: optional single-flight per host
//! - **Core**: `_dnslink.<host>` TXT lookup and link selection (innermost)
//!
//! ## Example Usage
//!
//! ```no_run
//! use dnslink_router_infrastructure::dns::{HickoryTxtLookup, LinkCache, ResolverBuilder};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let lookup = HickoryTxtLookup::new(vec!["8.8.8.8:53".parse().unwrap()], Duration::from_secs(2));
//! let resolver = ResolverBuilder::new(Arc::new(lookup))
//!     .with_cache(Arc::new(LinkCache::new(Duration::from_secs(60))))
//!     .with_coalescing(true)
//!     .build();
//! ```

pub mod builder;
pub mod cache_layer;
pub mod coalescing;
pub mod core;

pub use builder::ResolverBuilder;
pub use cache_layer::CachedLinkResolver;
pub use coalescing::CoalescingLinkResolver;
pub use self::core::CoreLinkResolver;
