//! Hard-coded view data for the dashboards.
//!
//! DESIGN
//! ======
//! Fixtures are plain `'static` slices; pages filter them with the helpers in
//! each submodule. Nothing here is persisted or has identity beyond display.

pub mod appointments;
pub mod contacts;
pub mod drugs;
pub mod notifications;
pub mod patients;
pub mod records;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Case-insensitive substring search over several fields. Blank queries match.
#[must_use]
pub fn matches_query<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.into_iter().any(|field| field.to_lowercase().contains(&needle))
}
