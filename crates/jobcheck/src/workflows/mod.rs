pub mod catalog;
pub mod dashboard;
pub mod reports;
pub mod verification;
