use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::course_paged::CoursePagedRepository,
    error::AppError,
    model::{course::Course, page::PageRequest},
    service::course::load_details,
};

pub struct CoursePagedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoursePagedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_student_email(
        &self,
        email: &str,
        page: PageRequest,
    ) -> Result<Vec<Course>, AppError> {
        page.validate()?;

        let courses = CoursePagedRepository::new(self.db)
            .find_by_student_email(email, page)
            .await?;

        load_details(self.db, courses).await
    }

    pub async fn find_by_student_email_native(
        &self,
        email: &str,
        page: PageRequest,
    ) -> Result<Vec<Course>, AppError> {
        page.validate()?;

        let courses = CoursePagedRepository::new(self.db)
            .find_by_student_email_native(email, page)
            .await?;

        load_details(self.db, courses).await
    }
}
