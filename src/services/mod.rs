// Services module - aggregation and seeding on top of the store

pub mod bootstrap;
pub mod dashboard;

pub use bootstrap::seed_demo_users;
pub use dashboard::DashboardSummary;
