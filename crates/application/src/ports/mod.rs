pub mod clock;
pub mod link_resolver;
pub mod txt_lookup;

pub use clock::Clock;
pub use link_resolver::LinkResolver;
pub use txt_lookup::TxtLookup;
