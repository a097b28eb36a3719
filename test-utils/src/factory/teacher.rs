//! Teacher factory for creating test teacher entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teachers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::teacher::TeacherFactory;
///
/// let teacher = TeacherFactory::new(&db)
///     .first_name("Grace")
///     .last_name("Hopper")
///     .subject("Computer Science")
///     .build()
///     .await?;
/// ```
pub struct TeacherFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    subject: String,
    phone: String,
}

impl<'a> TeacherFactory<'a> {
    /// Creates a new TeacherFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Teacher"`
    /// - last_name: `"{id}"` where id is auto-incremented
    /// - email: `"teacher{id}@school.test"`
    /// - subject: `"General"`
    /// - phone: `"555-{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Teacher".to_string(),
            last_name: id.to_string(),
            email: format!("teacher{}@school.test", id),
            subject: "General".to_string(),
            phone: format!("555-{}", id),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Builds and inserts the teacher entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::teacher::Model)` - Created teacher entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::teacher::Model, DbErr> {
        let now = Utc::now();
        entity::teacher::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            subject: ActiveValue::Set(self.subject),
            phone: ActiveValue::Set(self.phone),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a teacher with default values.
///
/// Shorthand for `TeacherFactory::new(db).build().await`.
pub async fn create_teacher(db: &DatabaseConnection) -> Result<entity::teacher::Model, DbErr> {
    TeacherFactory::new(db).build().await
}
