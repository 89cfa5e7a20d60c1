use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Zero-based page request.
///
/// Both values are capped at `i32::MAX`, so `page * size` always fits an SQL `BIGINT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageRequest {
    /// Zero-based page index.
    #[validate(range(max = 2147483647, message = "Page index must be at most 2147483647"))]
    pub page: u32,
    /// Number of rows per page, at least 1.
    #[validate(range(
        min = 1,
        max = 2147483647,
        message = "Page size must be between 1 and 2147483647"
    ))]
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// `LIMIT` and `OFFSET` of this page, or `None` for a zero size or an offset past `i64`.
    pub fn window(&self) -> Option<(i64, i64)> {
        if self.size == 0 {
            return None;
        }

        let limit = i64::from(self.size);
        let offset = i64::from(self.page).checked_mul(limit)?;

        Some((limit, offset))
    }
}
