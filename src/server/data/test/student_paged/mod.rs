use super::*;

mod find_by_course_name;
mod find_by_firstname;
mod find_by_lastname;
mod find_by_name;
mod wildcards;

/// Seeds 40 students named `John{i} Doe`, all related to "Computer Science".
async fn seed_computer_science(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    let course = factory::course::create_course_named(db, "Computer Science").await?;

    for i in 0..40 {
        let student = factory::student::create_student_with(
            db,
            &format!("John{}", i),
            "Doe",
            &format!("john{}.doe@uni.edu", i),
        )
        .await?;
        factory::create_relation(db, student.id, course.id).await?;
    }

    Ok(())
}
