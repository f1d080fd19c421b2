use sea_orm::entity::prelude::*;

/// Submitted invoice with its per-product delivered quantities.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "InvoiceDetails")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id: i32,
    #[sea_orm(column_name = "UserID")]
    pub user_id: String,
    #[sea_orm(column_name = "OutletCode")]
    pub outlet_code: String,
    #[sea_orm(column_name = "OutletName")]
    pub outlet_name: String,
    #[sea_orm(column_name = "InvoiceAvailable")]
    pub invoice_available: bool,
    #[sea_orm(column_name = "DisplayType")]
    pub display_type: String,
    #[sea_orm(column_name = "InvoiceDate")]
    pub invoice_date: Date,
    #[sea_orm(column_name = "InvoiceNumber")]
    pub invoice_number: String,
    #[sea_orm(column_name = "InvoiceDocument")]
    pub invoice_document: Option<String>,
    #[sea_orm(column_name = "SENSODENT_K_FR_75GM")]
    pub sensodent_k_fr_75gm: i32,
    #[sea_orm(column_name = "SENSODENT_KF_CP_75GM")]
    pub sensodent_kf_cp_75gm: i32,
    #[sea_orm(column_name = "SENSODENT_K_FR_125GM")]
    pub sensodent_k_fr_125gm: i32,
    #[sea_orm(column_name = "SENSODENT_KF_CP_125GM")]
    pub sensodent_kf_cp_125gm: i32,
    #[sea_orm(column_name = "SENSODENT_KF_CP_15G")]
    pub sensodent_kf_cp_15g: i32,
    #[sea_orm(column_name = "SENSODENT_K_FR_15G")]
    pub sensodent_k_fr_15g: i32,
    #[sea_orm(column_name = "KIDODENT_CAVITY_SHIELD")]
    pub kidodent_cavity_shield: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::outlets::Entity",
        from = "Column::OutletCode",
        to = "super::outlets::Column::OutletCode"
    )]
    Outlet,
}

impl Related<super::outlets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Outlet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
