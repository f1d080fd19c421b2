use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RouteSchedule::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RouteSchedule::UserId).string().not_null())
                    .col(ColumnDef::new(RouteSchedule::RouteName).string().not_null())
                    .col(ColumnDef::new(RouteSchedule::Month).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(RouteSchedule::UserId)
                            .col(RouteSchedule::RouteName)
                            .col(RouteSchedule::Month),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RouteSchedule::Table, RouteSchedule::UserId)
                            .to(MobiUser::Table, MobiUser::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RouteSchedule::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RouteSchedule {
    #[iden = "mobiRouteScheduleList"]
    Table,
    #[iden = "userID"]
    UserId,
    #[iden = "routeName"]
    RouteName,
    #[iden = "MONTH"]
    Month,
}

#[derive(Iden)]
enum MobiUser {
    #[iden = "MobiUser"]
    Table,
    #[iden = "userID"]
    UserId,
}
