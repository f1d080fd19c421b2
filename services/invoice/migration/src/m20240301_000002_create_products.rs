use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApProduct::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApProduct::ProductId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ApProduct::ProductDescription)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ApProduct::ClientId).integer().not_null())
                    .col(
                        ColumnDef::new(ApProduct::Deleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApProduct::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ApProduct {
    #[iden = "apProduct"]
    Table,
    #[iden = "productID"]
    ProductId,
    #[iden = "productDescription"]
    ProductDescription,
    #[iden = "clientID"]
    ClientId,
    #[iden = "deleted"]
    Deleted,
}
