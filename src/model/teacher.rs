use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeacherDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@school.edu", format = "email")]
    pub email: String,
    #[schema(example = "Mathematics")]
    pub subject: String,
    #[schema(example = "+44 20 7946 0000")]
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Teacher fields accepted by create, bulk create and update.
///
/// Required fields default to empty so that a missing field is reported as a
/// validation error naming the field rather than a generic deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TeacherInputDto {
    #[serde(default)]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[serde(default)]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[serde(default)]
    #[schema(example = "ada@school.edu", format = "email")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Mathematics")]
    pub subject: String,
    #[serde(default)]
    #[schema(example = "+44 20 7946 0000")]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BulkCreateTeachersDto {
    #[schema(example = "Teachers created successfully")]
    pub message: String,
    #[schema(example = 3)]
    pub count: u64,
}
