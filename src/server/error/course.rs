use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    /// No course has the requested id.
    #[error("Course not found with id {0}")]
    NotFoundById(i32),

    /// No course has the requested name.
    #[error("Course not found with name {0}")]
    NotFoundByName(String),

    /// The name already belongs to a course (a different one, on update).
    #[error("Course already exists with name {0}")]
    AlreadyExists(String),
}

impl CourseError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFoundById(_) | Self::NotFoundByName(_) => "CourseNotFoundException",
            Self::AlreadyExists(_) => "CourseAlreadyExistsException",
        }
    }
}
