use std::collections::BTreeSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::course::CreateCourseParams;

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCourseParams) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .filter(entity::course::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets every course whose id is in `ids`; unknown ids are absent from the result.
    pub async fn find_by_ids(
        &self,
        ids: &BTreeSet<i32>,
    ) -> Result<Vec<entity::course::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the courses of the student with the exact e-mail `email`, ordered by name and id.
    pub async fn find_by_student_email(
        &self,
        email: &str,
    ) -> Result<Vec<entity::course::Model>, DbErr> {
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
            .all(self.db)
            .await
    }

    pub async fn update(&self, id: i32, name: String) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(name),
        }
        .update(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
