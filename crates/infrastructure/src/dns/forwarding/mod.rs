pub mod message_builder;
pub mod response_parser;

pub use message_builder::TxtQueryBuilder;
pub use response_parser::{TxtResponse, TxtResponseParser};
