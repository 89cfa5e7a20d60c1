use super::*;

mod create;
mod delete;
mod find_by_course_name;
mod find_by_ids;
mod update;
