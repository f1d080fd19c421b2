pub mod catalog;
pub mod document;
pub mod invoice_record;
pub mod outlet;
pub mod route;
pub mod submit_invoice;
