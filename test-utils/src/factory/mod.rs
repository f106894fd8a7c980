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
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let field = factory::field::create_field(&db).await?;
//!     let student = factory::student::create_student(&db, field.id).await?;
//!
//!     // Or everything at once
//!     let (field, subject, student, mark) =
//!         factory::helpers::create_mark_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db, field.id)
//!     .username("alice")
//!     .enrollment_year(2023)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `field` - Create field of study entities
//! - `student` - Create student entities
//! - `subject` - Create subject entities
//! - `mark` - Create mark entities
//! - `user` - Create dashboard user accounts
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod field;
pub mod helpers;
pub mod mark;
pub mod student;
pub mod subject;
pub mod user;

pub use field::create_field;
pub use mark::create_mark;
pub use student::create_student;
pub use subject::create_subject;
pub use user::create_user;
