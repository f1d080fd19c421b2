use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(InvoiceDetails::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(InvoiceDetails::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(InvoiceDetails::UserId).string().not_null())
            .col(ColumnDef::new(InvoiceDetails::OutletCode).string().not_null())
            .col(ColumnDef::new(InvoiceDetails::OutletName).string().not_null())
            .col(
                ColumnDef::new(InvoiceDetails::InvoiceAvailable)
                    .boolean()
                    .not_null(),
            )
            .col(
                ColumnDef::new(InvoiceDetails::DisplayType)
                    .string()
                    .not_null()
                    .default("Standard"),
            )
            .col(ColumnDef::new(InvoiceDetails::InvoiceDate).date().not_null())
            .col(
                ColumnDef::new(InvoiceDetails::InvoiceNumber)
                    .string()
                    .not_null(),
            )
            .col(ColumnDef::new(InvoiceDetails::InvoiceDocument).string().null())
            .foreign_key(
                ForeignKey::create()
                    .from(InvoiceDetails::Table, InvoiceDetails::OutletCode)
                    .to(ApOutlet::Table, ApOutlet::OutletCode),
            );

        for product in [
            InvoiceDetails::SensodentKFr75gm,
            InvoiceDetails::SensodentKfCp75gm,
            InvoiceDetails::SensodentKFr125gm,
            InvoiceDetails::SensodentKfCp125gm,
            InvoiceDetails::SensodentKfCp15g,
            InvoiceDetails::SensodentKFr15g,
            InvoiceDetails::KidodentCavityShield,
        ] {
            table.col(
                ColumnDef::new(product)
                    .integer()
                    .not_null()
                    .default(0)
                    .check(Expr::col(product).gte(0)),
            );
        }

        manager.create_table(table.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invoice_details_outlet_date")
                    .table(InvoiceDetails::Table)
                    .col(InvoiceDetails::OutletCode)
                    .col(InvoiceDetails::InvoiceDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InvoiceDetails::Table).to_owned())
            .await
    }
}

#[derive(Iden, Clone, Copy)]
enum InvoiceDetails {
    #[iden = "InvoiceDetails"]
    Table,
    #[iden = "ID"]
    Id,
    #[iden = "UserID"]
    UserId,
    #[iden = "OutletCode"]
    OutletCode,
    #[iden = "OutletName"]
    OutletName,
    #[iden = "InvoiceAvailable"]
    InvoiceAvailable,
    #[iden = "DisplayType"]
    DisplayType,
    #[iden = "InvoiceDate"]
    InvoiceDate,
    #[iden = "InvoiceNumber"]
    InvoiceNumber,
    #[iden = "InvoiceDocument"]
    InvoiceDocument,
    #[iden = "SENSODENT_K_FR_75GM"]
    SensodentKFr75gm,
    #[iden = "SENSODENT_KF_CP_75GM"]
    SensodentKfCp75gm,
    #[iden = "SENSODENT_K_FR_125GM"]
    SensodentKFr125gm,
    #[iden = "SENSODENT_KF_CP_125GM"]
    SensodentKfCp125gm,
    #[iden = "SENSODENT_KF_CP_15G"]
    SensodentKfCp15g,
    #[iden = "SENSODENT_K_FR_15G"]
    SensodentKFr15g,
    #[iden = "KIDODENT_CAVITY_SHIELD"]
    KidodentCavityShield,
}

#[derive(Iden)]
enum ApOutlet {
    #[iden = "apOutlet"]
    Table,
    #[iden = "outletCode"]
    OutletCode,
}
