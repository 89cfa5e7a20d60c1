use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Statement,
};

use crate::server::{
    data::{contains_pattern, page_window, placeholder},
    model::page::PageRequest,
};

use entity::student::Column;

pub struct StudentPagedRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentPagedRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Students whose firstname contains `firstname`, ordered by firstname, lastname, id.
    pub async fn find_by_firstname_containing(
        &self,
        firstname: &str,
        page: PageRequest,
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        let query = entity::prelude::Student::find()
            .filter(Column::Firstname.like(contains_pattern(firstname)))
            .order_by_asc(Column::Firstname)
            .order_by_asc(Column::Lastname)
            .order_by_asc(Column::Id);

        self.fetch(query, page).await
    }

    /// Students whose lastname contains `lastname`, ordered by lastname, firstname, id.
    pub async fn find_by_lastname_containing(
        &self,
        lastname: &str,
        page: PageRequest,
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        let query = entity::prelude::Student::find()
            .filter(Column::Lastname.like(contains_pattern(lastname)))
            .order_by_asc(Column::Lastname)
            .order_by_asc(Column::Firstname)
            .order_by_asc(Column::Id);

        self.fetch(query, page).await
    }

    /// Students matching either name fragment, ordered by firstname, lastname, id.
    pub async fn find_by_firstname_or_lastname_containing(
        &self,
        firstname: &str,
        lastname: &str,
        page: PageRequest,
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        let query = entity::prelude::Student::find()
            .filter(
                Condition::any()
                    .add(Column::Firstname.like(contains_pattern(firstname)))
                    .add(Column::Lastname.like(contains_pattern(lastname))),
            )
            .order_by_asc(Column::Firstname)
            .order_by_asc(Column::Lastname)
            .order_by_asc(Column::Id);

        self.fetch(query, page).await
    }

    /// Students of the course named exactly `course_name`, ordered by firstname, lastname, id.
    pub async fn find_by_course_name(
        &self,
        course_name: &str,
        page: PageRequest,
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        let query = entity::prelude::Student::find()
            .join(
                JoinType::InnerJoin,
                entity::student::Relation::StudentCourse.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::student_course::Relation::Course.def(),
            )
            .filter(entity::course::Column::Name.eq(course_name))
            .order_by_asc(Column::Firstname)
            .order_by_asc(Column::Lastname)
            .order_by_asc(Column::Id);

        self.fetch(query, page).await
    }

    /// Hand-written SQL form of `find_by_course_name`; returns the same page.
    pub async fn find_by_course_name_native(
        &self,
        course_name: &str,
        page: PageRequest,
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        let (limit, offset) = page_window(page)?;
        let backend = self.db.get_database_backend();
        let sql = format!(
            "SELECT s.id, s.firstname, s.lastname, s.email \
             FROM student s \
             INNER JOIN student_course sc ON sc.student_id = s.id \
             INNER JOIN course c ON c.id = sc.course_id \
             WHERE c.name = {} \
             ORDER BY s.firstname, s.lastname, s.id \
             LIMIT {} OFFSET {}",
            placeholder(backend, 1),
            placeholder(backend, 2),
            placeholder(backend, 3),
        );

        entity::prelude::Student::find()
            .from_raw_sql(Statement::from_sql_and_values(
                backend,
                sql,
                [course_name.into(), limit.into(), offset.into()],
            ))
            .all(self.db)
            .await
    }

    async fn fetch(
        &self,
        query: Select<entity::student::Entity>,
        page: PageRequest,
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        page_window(page)?;

        query
            .paginate(self.db, u64::from(page.size))
            .fetch_page(u64::from(page.page))
            .await
    }
}
