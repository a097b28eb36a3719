pub use super::attendance::Entity as Attendance;
pub use super::teacher::Entity as Teacher;
