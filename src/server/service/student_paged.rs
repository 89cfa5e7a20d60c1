use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::student_paged::StudentPagedRepository,
    error::AppError,
    model::{page::PageRequest, student::Student},
    service::student::load_details,
};

/// Paged student searches. Each call returns only the requested slice, with courses.
pub struct StudentPagedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentPagedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_firstname_containing(
        &self,
        firstname: &str,
        page: PageRequest,
    ) -> Result<Vec<Student>, AppError> {
        tracing::debug!("Paged search by firstname '{}' {:?}", firstname, page);

        page.validate()?;

        let students = StudentPagedRepository::new(self.db)
            .find_by_firstname_containing(firstname, page)
            .await?;

        load_details(self.db, students).await
    }

    pub async fn find_by_lastname_containing(
        &self,
        lastname: &str,
        page: PageRequest,
    ) -> Result<Vec<Student>, AppError> {
        tracing::debug!("Paged search by lastname '{}' {:?}", lastname, page);

        page.validate()?;

        let students = StudentPagedRepository::new(self.db)
            .find_by_lastname_containing(lastname, page)
            .await?;

        load_details(self.db, students).await
    }

    pub async fn find_by_firstname_or_lastname_containing(
        &self,
        firstname: &str,
        lastname: &str,
        page: PageRequest,
    ) -> Result<Vec<Student>, AppError> {
        page.validate()?;

        let students = StudentPagedRepository::new(self.db)
            .find_by_firstname_or_lastname_containing(firstname, lastname, page)
            .await?;

        load_details(self.db, students).await
    }

    pub async fn find_by_course_name(
        &self,
        course_name: &str,
        page: PageRequest,
    ) -> Result<Vec<Student>, AppError> {
        page.validate()?;

        let students = StudentPagedRepository::new(self.db)
            .find_by_course_name(course_name, page)
            .await?;

        load_details(self.db, students).await
    }

    /// Same result as `find_by_course_name`, served by hand-written SQL.
    pub async fn find_by_course_name_native(
        &self,
        course_name: &str,
        page: PageRequest,
    ) -> Result<Vec<Student>, AppError> {
        page.validate()?;

        let students = StudentPagedRepository::new(self.db)
            .find_by_course_name_native(course_name, page)
            .await?;

        load_details(self.db, students).await
    }
}
