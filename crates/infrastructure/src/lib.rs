//! DNSLink Router Infrastructure Layer
//!
//! Resolution cache, resolver decorators and the wire-level TXT lookup.
pub mod dns;
