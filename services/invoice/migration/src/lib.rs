use sea_orm_migration::prelude::*;

mod m20240301_000001_create_outlets;
mod m20240301_000002_create_products;
mod m20240301_000003_create_mobi_users;
mod m20240301_000004_create_route_schedules;
mod m20240301_000005_create_invoice_details;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_outlets::Migration),
            Box::new(m20240301_000002_create_products::Migration),
            Box::new(m20240301_000003_create_mobi_users::Migration),
            Box::new(m20240301_000004_create_route_schedules::Migration),
            Box::new(m20240301_000005_create_invoice_details::Migration),
        ]
    }
}
