//! Request-independent business rules. Nothing in here touches the database.

pub mod colors;
pub mod ordering;
pub mod ratings;
pub mod removal;
pub mod slug;
pub mod views;
