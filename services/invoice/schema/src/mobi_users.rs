use sea_orm::entity::prelude::*;

/// Mobile field user. The credential column of the underlying table is
/// intentionally not mapped.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "MobiUser")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "userID")]
    pub user_id: String,
    #[sea_orm(column_name = "userName")]
    pub user_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::route_schedules::Entity")]
    RouteSchedules,
}

impl Related<super::route_schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RouteSchedules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
