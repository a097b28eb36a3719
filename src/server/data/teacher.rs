//! Teacher data repository for database operations.
//!
//! Provides the `TeacherRepository` for creating, updating, fetching and searching
//! teacher records. Search filters are case-insensitive and are expressed through
//! `LOWER(...)` so they behave the same on PostgreSQL and SQLite.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::teacher::{
    CreateTeacherParam, Teacher, TeacherFields, TeacherSearchParam, UpdateTeacherParam,
};

/// Repository providing database operations for teacher management.
pub struct TeacherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a single teacher.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The stored teacher including its generated id and timestamps
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTeacherParam) -> Result<Teacher, DbErr> {
        let entity = new_active_model(param).insert(self.db).await?;

        Ok(Teacher::from_entity(entity))
    }

    /// Inserts several teachers with a single INSERT statement.
    ///
    /// Either every row is stored or, on error, none is.
    ///
    /// # Arguments
    /// - `params` - Teachers to insert; callers reject an empty list beforehand
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_many(&self, params: Vec<CreateTeacherParam>) -> Result<u64, DbErr> {
        if params.is_empty() {
            return Ok(0);
        }

        entity::prelude::Teacher::insert_many(params.into_iter().map(new_active_model))
            .exec_without_returning(self.db)
            .await
    }

    /// Overwrites every mutable field of a teacher and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Teacher))` - The updated teacher
    /// - `Ok(None)` - No teacher with that id exists
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update(&self, param: UpdateTeacherParam) -> Result<Option<Teacher>, DbErr> {
        let Some(existing) = entity::prelude::Teacher::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let TeacherFields {
            first_name,
            last_name,
            email,
            subject,
            phone,
        } = param.fields;

        let mut active = existing.into_active_model();
        active.first_name = ActiveValue::Set(first_name);
        active.last_name = ActiveValue::Set(last_name);
        active.email = ActiveValue::Set(email);
        active.subject = ActiveValue::Set(subject);
        active.phone = ActiveValue::Set(phone);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Teacher::from_entity(entity)))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Teacher>, DbErr> {
        let entity = entity::prelude::Teacher::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Teacher::from_entity))
    }

    /// Checks whether a teacher with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Teacher::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Searches teachers, ordered by id ascending.
    ///
    /// `q` matches as a case-insensitive substring of first name, last name, email or
    /// subject; `subject` must equal the teacher's subject ignoring case. Both filters
    /// apply together when present; with neither, every teacher is returned.
    pub async fn search(&self, param: &TeacherSearchParam) -> Result<Vec<Teacher>, DbErr> {
        let mut query = entity::prelude::Teacher::find();

        if let Some(q) = &param.q {
            let pattern = substring_pattern(q);
            query = query.filter(
                Condition::any()
                    .add(lower(entity::teacher::Column::FirstName).like(pattern.clone()))
                    .add(lower(entity::teacher::Column::LastName).like(pattern.clone()))
                    .add(lower(entity::teacher::Column::Email).like(pattern.clone()))
                    .add(lower(entity::teacher::Column::Subject).like(pattern)),
            );
        }

        if let Some(subject) = &param.subject {
            query = query.filter(lower(entity::teacher::Column::Subject).eq(subject.to_lowercase()));
        }

        let teachers = query
            .order_by_asc(entity::teacher::Column::Id)
            .all(self.db)
            .await?;

        Ok(teachers.into_iter().map(Teacher::from_entity).collect())
    }

    /// Total number of stored teachers.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Teacher::find().count(self.db).await
    }
}

/// `%term%` in lower case, with backslash, `%` and `_` in `term` escaped so they match literally.
fn substring_pattern(term: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

fn new_active_model(param: CreateTeacherParam) -> entity::teacher::ActiveModel {
    let now = Utc::now();
    entity::teacher::ActiveModel {
        first_name: ActiveValue::Set(param.first_name),
        last_name: ActiveValue::Set(param.last_name),
        email: ActiveValue::Set(param.email),
        subject: ActiveValue::Set(param.subject),
        phone: ActiveValue::Set(param.phone),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

fn lower(column: entity::teacher::Column) -> Expr {
    Expr::expr(Func::lower(Expr::col(column)))
}
