use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Statement,
};

use crate::server::{
    data::{page_window, placeholder},
    model::page::PageRequest,
};

pub struct CoursePagedRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CoursePagedRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Courses of the student with the exact e-mail `email`, ordered by name and id.
    pub async fn find_by_student_email(
        &self,
        email: &str,
        page: PageRequest,
    ) -> Result<Vec<entity::course::Model>, DbErr> {
        page_window(page)?;

        entity::prelude::Course::find()
            .join(
                JoinType::InnerJoin,
                entity::course::Relation::StudentCourse.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::student_course::Relation::Student.def(),
            )
            .filter(entity::student::Column::Email.eq(email))
            .order_by_asc(entity::course::Column::Name)
            .order_by_asc(entity::course::Column::Id)
            .paginate(self.db, u64::from(page.size))
            .fetch_page(u64::from(page.page))
            .await
    }

    /// Hand-written SQL form of `find_by_student_email`.
    pub async fn find_by_student_email_native(
        &self,
        email: &str,
        page: PageRequest,
    ) -> Result<Vec<entity::course::Model>, DbErr> {
        let (limit, offset) = page_window(page)?;
        let backend = self.db.get_database_backend();
        let sql = format!(
            "SELECT c.id, c.name \
             FROM course c \
             INNER JOIN student_course sc ON sc.course_id = c.id \
             INNER JOIN student s ON s.id = sc.student_id \
             WHERE s.email = {} \
             ORDER BY c.name, c.id \
             LIMIT {} OFFSET {}",
            placeholder(backend, 1),
            placeholder(backend, 2),
            placeholder(backend, 3),
        );

        entity::prelude::Course::find()
            .from_raw_sql(Statement::from_sql_and_values(
                backend,
                sql,
                [email.into(), limit.into(), offset.into()],
            ))
            .all(self.db)
            .await
    }
}
