use sea_orm_migration::prelude::*;

use fieldsales_invoice_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
