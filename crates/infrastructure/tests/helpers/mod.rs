#![allow(dead_code)]
pub mod dns_server_mock;
pub mod mock_lookup;

pub use dns_server_mock::{MockAnswer, MockDnsServer};
pub use mock_lookup::{ManualClock, MockTxtLookup};
