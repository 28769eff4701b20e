use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "listings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub img: String,
    #[sea_orm(unique)]
    pub title: String,
    pub location: String,
    pub listing_type: String,
    pub guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub price_per_night: String,
    pub rating: String,
    pub creator: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::Creator",
        to = "super::user::Column::Id"
    )]
    Creator,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
    #[sea_orm(has_many = "super::user_listing::Entity")]
    UserListing,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<super::user_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserListing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
