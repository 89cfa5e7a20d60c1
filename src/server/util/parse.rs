use std::collections::BTreeSet;

use crate::server::error::AppError;

/// Parses a comma-separated list of positive ids such as `1,2,3`.
///
/// Duplicates collapse into one id. Blank entries are ignored.
///
/// # Returns
/// - `Ok(BTreeSet<i32>)` - At least one id
/// - `Err(AppError::Validation)` - The list is empty or an entry is not a positive integer
pub fn parse_id_set(field: &str, value: &str) -> Result<BTreeSet<i32>, AppError> {
    let mut ids = BTreeSet::new();

    for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let id = part
            .parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| {
                AppError::Validation(format!("{}: '{}' is not a positive id", field, part))
            })?;
        ids.insert(id);
    }

    if ids.is_empty() {
        return Err(AppError::Validation(format!(
            "{}: at least one id is required",
            field
        )));
    }

    Ok(ids)
}
