pub mod analytics;
pub mod catalog;
pub mod orders;
pub mod products;
pub mod ratings;
pub mod views;
