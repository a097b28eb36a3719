//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let teacher = factory::create_teacher(&db).await?;
//! let attendance = factory::create_attendance(&db, teacher.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::teacher::TeacherFactory;
//!
//! let teacher = TeacherFactory::new(&db)
//!     .first_name("Ada")
//!     .subject("Mathematics")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `teacher` - Create teacher entities
//! - `attendance` - Create attendance entities for an existing teacher
//! - `helpers` - Shared id counter

pub mod attendance;
pub mod helpers;
pub mod teacher;

// Re-export commonly used factory functions for concise usage
pub use attendance::create_attendance;
pub use teacher::create_teacher;
