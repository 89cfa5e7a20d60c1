pub use super::course::Entity as Course;
pub use super::student::Entity as Student;
pub use super::student_course::Entity as StudentCourse;
