use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApOutlet::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApOutlet::OutletCode)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ApOutlet::OutletName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ApOutlet::ClientRoute).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ap_outlet_client_route")
                    .table(ApOutlet::Table)
                    .col(ApOutlet::ClientRoute)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApOutlet::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ApOutlet {
    #[iden = "apOutlet"]
    Table,
    #[iden = "outletCode"]
    OutletCode,
    #[iden = "outletName"]
    OutletName,
    #[iden = "clientRoute"]
    ClientRoute,
}
