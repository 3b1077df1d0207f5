pub mod config;
pub mod error;
pub mod health;
pub mod metrics;
pub mod middleware;
pub mod analytics {
    pub mod controller;
    pub mod repository;
    pub mod usecase;

    pub use controller::configure_routes;
    pub use repository::{AnalyticsRepository, InMemoryAnalyticsRepository};
    pub use usecase::{AnalyticsUseCase, AnalyticsUseCaseImpl};

    #[cfg(test)]
    mod controller_tests;
}

pub mod openapi;
