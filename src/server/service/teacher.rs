use sea_orm::DatabaseConnection;

use crate::server::{
    data::teacher::TeacherRepository,
    error::AppError,
    model::teacher::{
        CreateTeacherParam, CreateTeachersParam, Teacher, TeacherSearchParam, UpdateTeacherParam,
    },
};

pub struct TeacherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a single teacher
    pub async fn create(&self, param: CreateTeacherParam) -> Result<Teacher, AppError> {
        let repo = TeacherRepository::new(self.db);

        let teacher = repo.create(param).await?;

        tracing::info!(teacher_id = teacher.id, "Created teacher");

        Ok(teacher)
    }

    /// Creates every teacher of a validated batch in one statement, returning how many were stored
    pub async fn create_many(&self, param: CreateTeachersParam) -> Result<u64, AppError> {
        let repo = TeacherRepository::new(self.db);

        let count = repo.create_many(param.teachers).await?;

        tracing::info!(count, "Created teachers in bulk");

        Ok(count)
    }

    /// Overwrites a teacher's fields
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The updated teacher
    /// - `Err(AppError::NotFound)` - No teacher with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, param: UpdateTeacherParam) -> Result<Teacher, AppError> {
        let repo = TeacherRepository::new(self.db);
        let id = param.id;

        repo.update(param)
            .await?
            .ok_or_else(|| AppError::teacher_not_found(id))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Teacher, AppError> {
        let repo = TeacherRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::teacher_not_found(id))
    }

    pub async fn search(&self, param: TeacherSearchParam) -> Result<Vec<Teacher>, AppError> {
        let repo = TeacherRepository::new(self.db);

        Ok(repo.search(&param).await?)
    }

    /// Total number of teachers
    pub async fn count(&self) -> Result<u64, AppError> {
        let repo = TeacherRepository::new(self.db);

        Ok(repo.count().await?)
    }
}
