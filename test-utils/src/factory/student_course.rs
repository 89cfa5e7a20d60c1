//! Factory for join rows between students and courses.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Relates a student to a course by inserting a join row.
///
/// # Returns
/// - `Ok(entity::student_course::Model)` - Created join row
/// - `Err(DbErr)` - Database error, including a primary key violation when the pair
///   already exists
pub async fn create_relation(
    db: &DatabaseConnection,
    student_id: i32,
    course_id: i32,
) -> Result<entity::student_course::Model, DbErr> {
    entity::student_course::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        course_id: ActiveValue::Set(course_id),
    }
    .insert(db)
    .await
}
