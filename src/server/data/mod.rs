//! Database repository layer.
//!
//! Repositories wrap SeaORM entity queries for the `student`, `course` and `student_course`
//! tables. They are generic over `ConnectionTrait`, so the same repository runs against the
//! connection pool or inside a `DatabaseTransaction` opened by a service. They return entity
//! models; services convert them to domain models.
//!
//! The paged repositories also carry hand-written SQL forms of two queries, which must return
//! the same rows in the same order as their query-builder counterparts.

pub mod course;
pub mod course_paged;
pub mod student;
pub mod student_course;
pub mod student_paged;

use sea_orm::{sea_query::LikeExpr, DbBackend, DbErr};

use crate::server::model::page::PageRequest;

/// Renders the `n`-th (1-based) bind parameter for hand-written SQL on `backend`.
pub(crate) fn placeholder(backend: DbBackend, n: usize) -> String {
    match backend {
        DbBackend::Postgres => format!("${}", n),
        _ => "?".to_string(),
    }
}

/// `LIMIT` and `OFFSET` for `page`, or an error for a zero size or an offset past `i64`.
pub(crate) fn page_window(page: PageRequest) -> Result<(i64, i64), DbErr> {
    page.window().ok_or_else(|| {
        DbErr::Custom(format!(
            "Page {} of size {} is out of range",
            page.page, page.size
        ))
    })
}

/// `LIKE` expression matching `fragment` literally anywhere in a value.
pub(crate) fn contains_pattern(fragment: &str) -> LikeExpr {
    LikeExpr::new(escape_like(fragment)).escape('\\')
}

fn escape_like(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    pattern
}

#[cfg(test)]
mod test;
