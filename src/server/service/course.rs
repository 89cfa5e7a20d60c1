use std::collections::BTreeSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        course::CourseRepository, student::StudentRepository,
        student_course::StudentCourseRepository,
    },
    error::{course::CourseError, relation::RelationError, student::StudentError, AppError},
    model::course::{Course, CreateCourseParams, UpdateCourseParams},
    service::on_unique_violation,
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a course with no students.
    ///
    /// # Returns
    /// - `Ok(Course)` - The stored course with its generated id
    /// - `Err(CourseError::AlreadyExists)` - The name is already in use
    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, AppError> {
        let course = create_in(self.db, params).await?;

        Ok(Course::from_entity(course, Vec::new()))
    }

    /// Creates a course and relates every student in `student_ids` to it atomically.
    pub async fn create_and_relate(
        &self,
        params: CreateCourseParams,
        student_ids: &BTreeSet<i32>,
    ) -> Result<Course, AppError> {
        let txn = self.db.begin().await?;

        let course = create_in(&txn, params).await?;
        relate_in(&txn, course.id, student_ids).await?;

        txn.commit().await?;

        self.find_by_id(course.id).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Course, AppError> {
        let course = CourseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(CourseError::NotFoundById(id))?;

        load_detail(self.db, course).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Course, AppError> {
        let course = CourseRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| CourseError::NotFoundByName(name.to_string()))?;

        load_detail(self.db, course).await
    }

    pub async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        let courses = CourseRepository::new(self.db).find_all().await?;

        load_details(self.db, courses).await
    }

    /// Gets the courses of the student with e-mail `email`, ordered by name.
    pub async fn find_by_student_email(&self, email: &str) -> Result<Vec<Course>, AppError> {
        let courses = CourseRepository::new(self.db)
            .find_by_student_email(email)
            .await?;

        load_details(self.db, courses).await
    }

    /// Overwrites the name and the complete student set of an existing course.
    ///
    /// # Returns
    /// - `Err(CourseError::NotFoundById)` - No course has `params.id`
    /// - `Err(CourseError::AlreadyExists)` - The name belongs to a different course
    /// - `Err(StudentError::NotFoundById)` - A listed student does not exist
    pub async fn update(&self, params: UpdateCourseParams) -> Result<Course, AppError> {
        let txn = self.db.begin().await?;
        let repo = CourseRepository::new(&txn);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(CourseError::NotFoundById(params.id).into());
        }

        if let Some(owner) = repo.find_by_name(&params.name).await? {
            if owner.id != params.id {
                return Err(CourseError::AlreadyExists(params.name).into());
            }
        }

        ensure_students_exist(&txn, &params.student_ids).await?;

        let name = params.name.clone();
        repo.update(params.id, params.name)
            .await
            .map_err(|e| on_unique_violation(e, CourseError::AlreadyExists(name)))?;

        StudentCourseRepository::new(&txn)
            .replace_for_course(params.id, &params.student_ids)
            .await?;

        txn.commit().await?;

        tracing::info!("Updated course {}", params.id);

        self.find_by_id(params.id).await
    }

    /// Relates additional students to an existing course.
    pub async fn relate(
        &self,
        course_id: i32,
        student_ids: &BTreeSet<i32>,
    ) -> Result<Course, AppError> {
        let txn = self.db.begin().await?;

        relate_in(&txn, course_id, student_ids).await?;

        txn.commit().await?;

        self.find_by_id(course_id).await
    }

    /// Unlinks every student from the course with the given name, then deletes it.
    pub async fn delete(&self, name: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = CourseRepository::new(&txn);

        let course = repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| CourseError::NotFoundByName(name.to_string()))?;

        let unlinked = StudentCourseRepository::new(&txn)
            .unlink_course(course.id)
            .await?;
        repo.delete(course.id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted course {} and {} student relation(s)",
            course.id,
            unlinked
        );

        Ok(())
    }

    pub async fn delete_by_name(&self, name: &str) -> Result<(), AppError> {
        let course = self.find_by_name(name).await?;

        self.delete(&course.name).await
    }
}

async fn create_in<C: ConnectionTrait>(
    db: &C,
    params: CreateCourseParams,
) -> Result<entity::course::Model, AppError> {
    let repo = CourseRepository::new(db);

    if repo.find_by_name(&params.name).await?.is_some() {
        return Err(CourseError::AlreadyExists(params.name).into());
    }

    let name = params.name.clone();
    let course = repo
        .create(params)
        .await
        .map_err(|e| on_unique_violation(e, CourseError::AlreadyExists(name)))?;

    tracing::info!("Created course {} '{}'", course.id, course.name);

    Ok(course)
}

async fn relate_in<C: ConnectionTrait>(
    db: &C,
    course_id: i32,
    student_ids: &BTreeSet<i32>,
) -> Result<(), AppError> {
    ensure_students_exist(db, student_ids).await?;

    if CourseRepository::new(db).find_by_id(course_id).await?.is_none() {
        return Err(CourseError::NotFoundById(course_id).into());
    }

    let links = StudentCourseRepository::new(db);

    if let Some(existing) = links
        .find_existing_for_course(course_id, student_ids)
        .await?
        .first()
    {
        return Err(RelationError::AlreadyRelated {
            student_id: existing.student_id,
            course_id: existing.course_id,
        }
        .into());
    }

    links
        .relate_students(course_id, student_ids)
        .await
        .map_err(|e| on_unique_violation(e, RelationError::ConcurrentlyRelated))?;

    tracing::debug!("Related course {} to students {:?}", course_id, student_ids);

    Ok(())
}

async fn ensure_students_exist<C: ConnectionTrait>(
    db: &C,
    student_ids: &BTreeSet<i32>,
) -> Result<(), AppError> {
    let found: BTreeSet<i32> = StudentRepository::new(db)
        .find_by_ids(student_ids)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();

    match student_ids.difference(&found).next() {
        Some(&missing) => Err(StudentError::NotFoundById(missing).into()),
        None => Ok(()),
    }
}

async fn load_detail<C: ConnectionTrait>(
    db: &C,
    course: entity::course::Model,
) -> Result<Course, AppError> {
    let mut students = StudentCourseRepository::new(db)
        .students_by_course(&[course.id])
        .await?;
    let students = students.remove(&course.id).unwrap_or_default();

    Ok(Course::from_entity(course, students))
}

/// Hydrates a list of courses with their students, keeping the list order.
pub(crate) async fn load_details<C: ConnectionTrait>(
    db: &C,
    courses: Vec<entity::course::Model>,
) -> Result<Vec<Course>, AppError> {
    let ids: Vec<i32> = courses.iter().map(|c| c.id).collect();
    let mut students = StudentCourseRepository::new(db)
        .students_by_course(&ids)
        .await?;

    Ok(courses
        .into_iter()
        .map(|c| {
            let related = students.remove(&c.id).unwrap_or_default();
            Course::from_entity(c, related)
        })
        .collect())
}
