use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudentError {
    /// No student has the requested id.
    #[error("Student not found with id {0}")]
    NotFoundById(i32),

    /// No student has the requested e-mail address.
    #[error("Student not found with e-mail {0}")]
    NotFoundByEmail(String),

    /// The e-mail address already belongs to a student (a different one, on update).
    #[error("Student already exists with e-mail {0}")]
    AlreadyExists(String),
}

impl StudentError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFoundById(_) | Self::NotFoundByEmail(_) => "StudentNotFoundException",
            Self::AlreadyExists(_) => "StudentAlreadyExistsException",
        }
    }
}
