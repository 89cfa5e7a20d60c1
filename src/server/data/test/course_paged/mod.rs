use super::*;

mod find_by_student_email;
