use sea_orm::entity::prelude::*;

/// Monthly assignment of a route to a user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mobiRouteScheduleList")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "userID")]
    pub user_id: String,
    #[sea_orm(primary_key, auto_increment = false, column_name = "routeName")]
    pub route_name: String,
    #[sea_orm(primary_key, auto_increment = false, column_name = "MONTH")]
    pub month: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mobi_users::Entity",
        from = "Column::UserId",
        to = "super::mobi_users::Column::UserId",
        on_delete = "Cascade"
    )]
    MobiUser,
}

impl Related<super::mobi_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MobiUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
