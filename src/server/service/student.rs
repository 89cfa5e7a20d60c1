use std::collections::BTreeSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        course::CourseRepository, student::StudentRepository,
        student_course::StudentCourseRepository,
    },
    error::{course::CourseError, relation::RelationError, student::StudentError, AppError},
    model::student::{CreateStudentParams, Student, UpdateStudentParams},
    service::on_unique_violation,
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student with no courses.
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student with its generated id
    /// - `Err(StudentError::AlreadyExists)` - The e-mail is already in use
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let student = create_in(self.db, params).await?;

        Ok(Student::from_entity(student, Vec::new()))
    }

    /// Creates a student and relates it to every course in `course_ids` atomically.
    ///
    /// Nothing is stored when any course is missing.
    pub async fn create_and_relate(
        &self,
        params: CreateStudentParams,
        course_ids: &BTreeSet<i32>,
    ) -> Result<Student, AppError> {
        let txn = self.db.begin().await?;

        let student = create_in(&txn, params).await?;
        relate_in(&txn, student.id, course_ids).await?;

        txn.commit().await?;

        self.find_by_id(student.id).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(StudentError::NotFoundById(id))?;

        load_detail(self.db, student).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| StudentError::NotFoundByEmail(email.to_string()))?;

        load_detail(self.db, student).await
    }

    pub async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let students = StudentRepository::new(self.db).find_all().await?;

        load_details(self.db, students).await
    }

    /// Gets the students of the course named `course_name`; an unknown course yields none.
    pub async fn find_by_course_name(&self, course_name: &str) -> Result<Vec<Student>, AppError> {
        let students = StudentRepository::new(self.db)
            .find_by_course_name(course_name)
            .await?;

        load_details(self.db, students).await
    }

    /// Overwrites names, e-mail and the complete course set of an existing student.
    ///
    /// # Returns
    /// - `Err(StudentError::NotFoundById)` - No student has `params.id`
    /// - `Err(StudentError::AlreadyExists)` - The e-mail belongs to a different student
    /// - `Err(CourseError::NotFoundById)` - A listed course does not exist
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, AppError> {
        let txn = self.db.begin().await?;
        let repo = StudentRepository::new(&txn);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(StudentError::NotFoundById(params.id).into());
        }

        if let Some(owner) = repo.find_by_email(&params.email).await? {
            if owner.id != params.id {
                return Err(StudentError::AlreadyExists(params.email).into());
            }
        }

        ensure_courses_exist(&txn, &params.course_ids).await?;

        let email = params.email.clone();
        repo.update(params.id, params.firstname, params.lastname, params.email)
            .await
            .map_err(|e| on_unique_violation(e, StudentError::AlreadyExists(email)))?;

        StudentCourseRepository::new(&txn)
            .replace_for_student(params.id, &params.course_ids)
            .await?;

        txn.commit().await?;

        tracing::info!("Updated student {}", params.id);

        self.find_by_id(params.id).await
    }

    /// Relates an existing student to additional courses.
    ///
    /// Every course is resolved and the whole set is checked for existing relations
    /// before any join row is written.
    pub async fn relate(
        &self,
        student_id: i32,
        course_ids: &BTreeSet<i32>,
    ) -> Result<Student, AppError> {
        let txn = self.db.begin().await?;

        relate_in(&txn, student_id, course_ids).await?;

        txn.commit().await?;

        self.find_by_id(student_id).await
    }

    /// Unlinks the student with the given e-mail from every course, then deletes it.
    pub async fn delete(&self, email: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = StudentRepository::new(&txn);

        let student = repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| StudentError::NotFoundByEmail(email.to_string()))?;

        let unlinked = StudentCourseRepository::new(&txn)
            .unlink_student(student.id)
            .await?;
        repo.delete(student.id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted student {} and {} course relation(s)",
            student.id,
            unlinked
        );

        Ok(())
    }

    pub async fn delete_by_email(&self, email: &str) -> Result<(), AppError> {
        let student = self.find_by_email(email).await?;

        self.delete(&student.email).await
    }
}

async fn create_in<C: ConnectionTrait>(
    db: &C,
    params: CreateStudentParams,
) -> Result<entity::student::Model, AppError> {
    let repo = StudentRepository::new(db);

    if repo.find_by_email(&params.email).await?.is_some() {
        return Err(StudentError::AlreadyExists(params.email).into());
    }

    let email = params.email.clone();
    let student = repo
        .create(params)
        .await
        .map_err(|e| on_unique_violation(e, StudentError::AlreadyExists(email)))?;

    tracing::info!("Created student {} <{}>", student.id, student.email);

    Ok(student)
}

async fn relate_in<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    course_ids: &BTreeSet<i32>,
) -> Result<(), AppError> {
    ensure_courses_exist(db, course_ids).await?;

    if StudentRepository::new(db).find_by_id(student_id).await?.is_none() {
        return Err(StudentError::NotFoundById(student_id).into());
    }

    let links = StudentCourseRepository::new(db);

    if let Some(existing) = links
        .find_existing_for_student(student_id, course_ids)
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
        .relate_courses(student_id, course_ids)
        .await
        .map_err(|e| on_unique_violation(e, RelationError::ConcurrentlyRelated))?;

    tracing::debug!("Related student {} to courses {:?}", student_id, course_ids);

    Ok(())
}

async fn ensure_courses_exist<C: ConnectionTrait>(
    db: &C,
    course_ids: &BTreeSet<i32>,
) -> Result<(), AppError> {
    let found: BTreeSet<i32> = CourseRepository::new(db)
        .find_by_ids(course_ids)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    match course_ids.difference(&found).next() {
        Some(&missing) => Err(CourseError::NotFoundById(missing).into()),
        None => Ok(()),
    }
}

async fn load_detail<C: ConnectionTrait>(
    db: &C,
    student: entity::student::Model,
) -> Result<Student, AppError> {
    let mut courses = StudentCourseRepository::new(db)
        .courses_by_student(&[student.id])
        .await?;
    let courses = courses.remove(&student.id).unwrap_or_default();

    Ok(Student::from_entity(student, courses))
}

/// Hydrates a list of students with their courses, keeping the list order.
pub(crate) async fn load_details<C: ConnectionTrait>(
    db: &C,
    students: Vec<entity::student::Model>,
) -> Result<Vec<Student>, AppError> {
    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    let mut courses = StudentCourseRepository::new(db)
        .courses_by_student(&ids)
        .await?;

    Ok(students
        .into_iter()
        .map(|s| {
            let related = courses.remove(&s.id).unwrap_or_default();
            Student::from_entity(s, related)
        })
        .collect())
}
