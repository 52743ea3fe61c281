pub mod mock_resolvers;

pub use mock_resolvers::MockLinkResolver;
