use sea_orm::entity::prelude::*;

/// Product master row. Only descriptions of live products are exposed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "apProduct")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "productID")]
    pub product_id: i32,
    #[sea_orm(column_name = "productDescription")]
    pub product_description: String,
    #[sea_orm(column_name = "clientID")]
    pub client_id: i32,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
