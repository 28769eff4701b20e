use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::Role;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user whose password has already been hashed.
    pub async fn create(
        &self,
        avatar: String,
        name: String,
        email: String,
        password_hash: String,
        role: Role,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            avatar: ActiveValue::Set(avatar),
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by email. The email must already be normalized.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
