use super::*;

mod create;
mod find_by_student_email;
mod update_and_delete;
