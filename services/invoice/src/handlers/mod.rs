pub mod catalog;
pub mod health;
pub mod invoice;
pub mod outlet;
pub mod route;
