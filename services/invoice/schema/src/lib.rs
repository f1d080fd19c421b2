//! sea-orm entities for the tables the invoice service reads and writes.
//!
//! Table and column identifiers keep the mixed-case names of the shared
//! field-sales catalog database.

pub mod invoice_details;
pub mod mobi_users;
pub mod outlets;
pub mod products;
pub mod route_schedules;
