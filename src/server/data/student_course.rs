//! Join-table repository shared by both relation directions.
//!
//! Every relation write in the application goes through `insert_pairs` and every unlink
//! through `unlink_student` / `unlink_course`, so student-side and course-side relating
//! behave the same.

use std::collections::{BTreeSet, HashMap};

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct StudentCourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentCourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one join row per `(student_id, course_id)` pair.
    ///
    /// A pair that already exists fails with a unique constraint violation from the
    /// composite primary key.
    pub async fn insert_pairs(&self, pairs: &[(i32, i32)]) -> Result<(), DbErr> {
        for &(student_id, course_id) in pairs {
            entity::student_course::ActiveModel {
                student_id: ActiveValue::Set(student_id),
                course_id: ActiveValue::Set(course_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Relates one student to each of `course_ids`.
    pub async fn relate_courses(
        &self,
        student_id: i32,
        course_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        let pairs: Vec<(i32, i32)> = course_ids.iter().map(|&c| (student_id, c)).collect();

        self.insert_pairs(&pairs).await
    }

    /// Relates one course to each of `student_ids`.
    pub async fn relate_students(
        &self,
        course_id: i32,
        student_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        let pairs: Vec<(i32, i32)> = student_ids.iter().map(|&s| (s, course_id)).collect();

        self.insert_pairs(&pairs).await
    }

    /// Gets the join rows between `student_id` and any of `course_ids`.
    pub async fn find_existing_for_student(
        &self,
        student_id: i32,
        course_ids: &BTreeSet<i32>,
    ) -> Result<Vec<entity::student_course::Model>, DbErr> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::StudentCourse::find()
            .filter(entity::student_course::Column::StudentId.eq(student_id))
            .filter(entity::student_course::Column::CourseId.is_in(course_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Gets the join rows between `course_id` and any of `student_ids`.
    pub async fn find_existing_for_course(
        &self,
        course_id: i32,
        student_ids: &BTreeSet<i32>,
    ) -> Result<Vec<entity::student_course::Model>, DbErr> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::StudentCourse::find()
            .filter(entity::student_course::Column::CourseId.eq(course_id))
            .filter(entity::student_course::Column::StudentId.is_in(student_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Removes every join row of the student, returning how many were removed.
    pub async fn unlink_student(&self, student_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::StudentCourse::delete_many()
            .filter(entity::student_course::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every join row of the course, returning how many were removed.
    pub async fn unlink_course(&self, course_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::StudentCourse::delete_many()
            .filter(entity::student_course::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Makes `course_ids` the complete relation set of the student.
    pub async fn replace_for_student(
        &self,
        student_id: i32,
        course_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        self.unlink_student(student_id).await?;
        self.relate_courses(student_id, course_ids).await
    }

    /// Makes `student_ids` the complete relation set of the course.
    pub async fn replace_for_course(
        &self,
        course_id: i32,
        student_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        self.unlink_course(course_id).await?;
        self.relate_students(course_id, student_ids).await
    }

    /// Gets the related courses of each given student in one query.
    ///
    /// Students without relations map to an empty vector.
    pub async fn courses_by_student(
        &self,
        student_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::course::Model>>, DbErr> {
        let mut map: HashMap<i32, Vec<entity::course::Model>> =
            student_ids.iter().map(|&id| (id, Vec::new())).collect();

        if student_ids.is_empty() {
            return Ok(map);
        }

        let rows = entity::prelude::StudentCourse::find()
            .filter(entity::student_course::Column::StudentId.is_in(student_ids.iter().copied()))
            .find_also_related(entity::prelude::Course)
            .all(self.db)
            .await?;

        for (link, course) in rows {
            if let Some(course) = course {
                map.entry(link.student_id).or_default().push(course);
            }
        }

        Ok(map)
    }

    /// Gets the related students of each given course in one query.
    pub async fn students_by_course(
        &self,
        course_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::student::Model>>, DbErr> {
        let mut map: HashMap<i32, Vec<entity::student::Model>> =
            course_ids.iter().map(|&id| (id, Vec::new())).collect();

        if course_ids.is_empty() {
            return Ok(map);
        }

        let rows = entity::prelude::StudentCourse::find()
            .filter(entity::student_course::Column::CourseId.is_in(course_ids.iter().copied()))
            .find_also_related(entity::prelude::Student)
            .all(self.db)
            .await?;

        for (link, student) in rows {
            if let Some(student) = student {
                map.entry(link.course_id).or_default().push(student);
            }
        }

        Ok(map)
    }
}
