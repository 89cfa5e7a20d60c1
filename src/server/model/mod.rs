//! Domain models and operation parameters for the service layer.
//!
//! Repositories hand entity models to these types at the data boundary; controllers
//! convert them to DTOs with `into_dto`. Parameter structs carry exactly what one
//! operation needs.

pub mod course;
pub mod page;
pub mod student;
