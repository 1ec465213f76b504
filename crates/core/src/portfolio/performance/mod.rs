pub(crate) mod performance_model;
pub(crate) mod performance_service;
pub(crate) mod performance_traits;


pub use performance_model::PortfolioSnapshot;
pub use performance_service::PerformanceService;
pub use performance_traits::{PerformanceServiceTrait, SnapshotRepositoryTrait};
