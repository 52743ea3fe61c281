//! DNSLink Router Application Layer
//!
//! Ports implemented by the infrastructure layer and the use cases the
//! surrounding request-handling layer calls.
pub mod ports;
pub mod use_cases;
