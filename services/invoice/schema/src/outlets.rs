use sea_orm::entity::prelude::*;

/// Retail outlet from the external catalog. Read-only for this service.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "apOutlet")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "outletCode")]
    pub outlet_code: String,
    #[sea_orm(unique, column_name = "outletName")]
    pub outlet_name: String,
    #[sea_orm(column_name = "clientRoute")]
    pub client_route: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::invoice_details::Entity")]
    InvoiceDetails,
}

impl Related<super::invoice_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvoiceDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
