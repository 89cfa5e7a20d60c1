use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    /// The student and course are already related.
    ///
    /// Reported before any join row is written, or when a concurrent relate wins the race
    /// and the composite primary key rejects the insert.
    #[error("Student {student_id} is already related to course {course_id}")]
    AlreadyRelated { student_id: i32, course_id: i32 },

    /// A concurrent writer inserted one of the requested pairs first.
    #[error("Student and course were related concurrently")]
    ConcurrentlyRelated,
}

impl RelationError {
    pub fn kind(&self) -> &'static str {
        "EntityAlreadyRelatedException"
    }
}
