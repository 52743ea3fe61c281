pub mod decide;

pub use decide::DecideRouteUseCase;
