//! SeaORM entities for the student CRM schema.
//!
//! `student` and `course` are linked many-to-many through the `student_course` join
//! table. The join table is a first-class entity: both directions of a relation are
//! written and removed through it.

pub mod prelude;

pub mod course;
pub mod student;
pub mod student_course;
