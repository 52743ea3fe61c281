pub mod routing;

// Re-export use cases
pub use routing::DecideRouteUseCase;
