//! Teacher domain model and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::teacher::{TeacherDto, TeacherInputDto},
    server::error::validation::ValidationError,
};

/// A stored teacher record.
#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Teacher {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::teacher::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            subject: entity.subject,
            phone: entity.phone,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> TeacherDto {
        TeacherDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            subject: self.subject,
            phone: self.phone,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated teacher fields used for both creation and full update.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub phone: String,
}

impl TeacherFields {
    /// Validates and normalizes teacher input.
    ///
    /// Surrounding whitespace is trimmed from every field. `first_name`, `last_name` and
    /// `email` must be non-blank and `email` must be a plausible address; `subject` and
    /// `phone` may be empty.
    ///
    /// # Arguments
    /// - `dto` - Raw teacher input from the request body
    ///
    /// # Returns
    /// - `Ok(TeacherFields)` - Input passed validation
    /// - `Err(ValidationError::MissingField)` - A required field is blank
    /// - `Err(ValidationError::InvalidEmail)` - Email is not well-formed
    pub fn from_dto(dto: TeacherInputDto) -> Result<Self, ValidationError> {
        let first_name = required("first_name", dto.first_name)?;
        let last_name = required("last_name", dto.last_name)?;
        let email = required("email", dto.email)?;

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail { email });
        }

        Ok(Self {
            first_name,
            last_name,
            email,
            subject: dto.subject.trim().to_string(),
            phone: dto.phone.trim().to_string(),
        })
    }
}

/// Parameters for creating a single teacher.
pub type CreateTeacherParam = TeacherFields;

/// Parameters for overwriting every mutable field of an existing teacher.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTeacherParam {
    pub id: i32,
    pub fields: TeacherFields,
}

impl UpdateTeacherParam {
    pub fn from_dto(id: i32, dto: TeacherInputDto) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            fields: TeacherFields::from_dto(dto)?,
        })
    }
}

/// Parameters for creating several teachers in one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTeachersParam {
    pub teachers: Vec<CreateTeacherParam>,
}

impl CreateTeachersParam {
    /// Validates every entry of a bulk create request.
    ///
    /// # Returns
    /// - `Ok(CreateTeachersParam)` - All entries valid, order preserved
    /// - `Err(ValidationError::EmptyBatch)` - The list is empty
    /// - `Err(ValidationError::InvalidBatchEntry)` - First invalid entry and its index
    pub fn from_dto(dtos: Vec<TeacherInputDto>) -> Result<Self, ValidationError> {
        if dtos.is_empty() {
            return Err(ValidationError::EmptyBatch);
        }

        let teachers = dtos
            .into_iter()
            .enumerate()
            .map(|(index, dto)| {
                TeacherFields::from_dto(dto).map_err(|e| ValidationError::InvalidBatchEntry {
                    index,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { teachers })
    }
}

/// Optional filters for teacher search.
///
/// Blank filter values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherSearchParam {
    /// Case-insensitive substring matched against first name, last name, email and subject
    pub q: Option<String>,
    /// Case-insensitive exact match on subject
    pub subject: Option<String>,
}

impl TeacherSearchParam {
    pub fn new(q: Option<String>, subject: Option<String>) -> Self {
        Self {
            q: non_blank(q),
            subject: non_blank(subject),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(field: &'static str, value: String) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(value.to_string())
}

/// Structural email check: one `@`, non-empty local part, dotted domain, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}
