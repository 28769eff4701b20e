use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub avatar: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_listing::Entity")]
    UserListing,
    #[sea_orm(has_many = "super::user_booking::Entity")]
    UserBooking,
}

impl Related<super::user_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserListing.def()
    }
}

impl Related<super::user_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBooking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
