//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for default creation. Defaults are made unique with a shared counter, so
//! several factory calls in one test never collide on the unique email or course name.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::create_student(&db).await?;
//! let course = factory::course::CourseFactory::new(&db)
//!     .name("Pacifism")
//!     .build()
//!     .await?;
//! factory::create_relation(&db, student.id, course.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `student` - Create student entities
//! - `course` - Create course entities
//! - `student_course` - Create join rows between students and courses
//! - `roster` - Seed the shared read-test roster of students and courses
//! - `helpers` - Unique id generation

pub mod course;
pub mod helpers;
pub mod roster;
pub mod student;
pub mod student_course;

// Re-export commonly used factory functions for concise usage
pub use course::create_course;
pub use roster::create_roster;
pub use student::create_student;
pub use student_course::create_relation;
