//! Student CRM Test Utils
//!
//! Shared testing utilities for the student CRM server. The crate builds in-memory
//! SQLite databases with the CRM schema and offers factories that insert students,
//! courses and their relations with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserting test data
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn relates_student() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_crm_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let student = factory::create_student(db).await?;
//!     let course = factory::create_course(db).await?;
//!     factory::create_relation(db, student.id, course.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
