//! Shared roster of students and courses for read-path tests.
//!
//! Seven students and four courses with the following relations:
//!
//! | Student                    | Courses                                     |
//! |----------------------------|---------------------------------------------|
//! | john.wick@pacifists.com    | Pacifism, Veganism                          |
//! | mad.max@pacifists.com      | Veganism                                    |
//! | john.rambo@pacifists.com   | Pacifism, Tolerance, Behaviour, Veganism    |
//! | john.wayne@pacifists.com   | -                                           |
//! | dirty.harry@pacifists.com  | Behaviour, Tolerance                        |
//! | harry.potter@pacifists.com | -                                           |
//! | john.doe@pacifists.com     | -                                           |

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{course::create_course_named, create_relation, student::create_student_with};

const STUDENTS: [(&str, &str, &str); 7] = [
    ("John", "Wick", "john.wick@pacifists.com"),
    ("Mad", "Max", "mad.max@pacifists.com"),
    ("John", "Rambo", "john.rambo@pacifists.com"),
    ("John", "Wayne", "john.wayne@pacifists.com"),
    ("Dirty", "Harry", "dirty.harry@pacifists.com"),
    ("Harry", "Potter", "harry.potter@pacifists.com"),
    ("John", "Doe", "john.doe@pacifists.com"),
];

const COURSES: [&str; 4] = ["Pacifism", "Tolerance", "Behaviour", "Veganism"];

const RELATIONS: [(&str, &str); 9] = [
    ("john.wick@pacifists.com", "Pacifism"),
    ("john.wick@pacifists.com", "Veganism"),
    ("mad.max@pacifists.com", "Veganism"),
    ("john.rambo@pacifists.com", "Pacifism"),
    ("john.rambo@pacifists.com", "Tolerance"),
    ("john.rambo@pacifists.com", "Behaviour"),
    ("john.rambo@pacifists.com", "Veganism"),
    ("dirty.harry@pacifists.com", "Behaviour"),
    ("dirty.harry@pacifists.com", "Tolerance"),
];

/// Entities inserted by [`create_roster`], keyed by email and course name.
pub struct Roster {
    pub students: HashMap<&'static str, entity::student::Model>,
    pub courses: HashMap<&'static str, entity::course::Model>,
}

/// Inserts the roster described in the module documentation.
pub async fn create_roster(db: &DatabaseConnection) -> Result<Roster, DbErr> {
    let mut students = HashMap::new();
    for (firstname, lastname, email) in STUDENTS {
        students.insert(email, create_student_with(db, firstname, lastname, email).await?);
    }

    let mut courses = HashMap::new();
    for name in COURSES {
        courses.insert(name, create_course_named(db, name).await?);
    }

    for (email, course_name) in RELATIONS {
        create_relation(db, students[email].id, courses[course_name].id).await?;
    }

    Ok(Roster { students, courses })
}
