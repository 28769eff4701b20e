use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub listing_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: DateTimeUtc,
    pub check_out: DateTimeUtc,
    pub booking_user: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::listing::Entity",
        from = "Column::ListingId",
        to = "super::listing::Column::Id"
    )]
    Listing,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::BookingUser",
        to = "super::user::Column::Id"
    )]
    BookingUser,
    #[sea_orm(has_many = "super::user_booking::Entity")]
    UserBooking,
}

impl Related<super::listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Listing.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingUser.def()
    }
}

impl Related<super::user_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBooking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
