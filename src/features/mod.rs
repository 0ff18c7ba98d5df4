pub mod assistant;
pub mod dashboard;
pub mod export;
pub mod health;
pub mod reports;
