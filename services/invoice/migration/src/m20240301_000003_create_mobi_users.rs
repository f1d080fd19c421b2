use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MobiUser::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MobiUser::UserId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MobiUser::UserName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MobiUser::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MobiUser {
    #[iden = "MobiUser"]
    Table,
    #[iden = "userID"]
    UserId,
    #[iden = "userName"]
    UserName,
}
