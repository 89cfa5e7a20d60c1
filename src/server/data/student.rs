use std::collections::BTreeSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::student::CreateStudentParams;

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new student row; the id is assigned by the database.
    pub async fn create(
        &self,
        params: CreateStudentParams,
    ) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            firstname: ActiveValue::Set(params.firstname),
            lastname: ActiveValue::Set(params.lastname),
            email: ActiveValue::Set(params.email),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets every student whose id is in `ids`; unknown ids are simply absent from the result.
    pub async fn find_by_ids(
        &self,
        ids: &BTreeSet<i32>,
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Student::find()
            .filter(entity::student::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the students related to the course with the exact name `course_name`, ordered by
    /// firstname, lastname and id.
    pub async fn find_by_course_name(
        &self,
        course_name: &str,
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .join(
                JoinType::InnerJoin,
                entity::student::Relation::StudentCourse.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::student_course::Relation::Course.def(),
            )
            .filter(entity::course::Column::Name.eq(course_name))
            .order_by_asc(entity::student::Column::Firstname)
            .order_by_asc(entity::student::Column::Lastname)
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites the scalar fields of an existing student.
    pub async fn update(
        &self,
        id: i32,
        firstname: String,
        lastname: String,
        email: String,
    ) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::Unchanged(id),
            firstname: ActiveValue::Set(firstname),
            lastname: ActiveValue::Set(lastname),
            email: ActiveValue::Set(email),
        }
        .update(self.db)
        .await
    }

    /// Deletes the student row, returning the number of rows removed.
    ///
    /// Join rows must be unlinked first (or are removed by the cascading foreign key).
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
