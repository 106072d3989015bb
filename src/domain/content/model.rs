use super::error::ContentError;
use std::path::{Path, PathBuf};

/// A tenant and the directory its content tree lives under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    pub id: String,
    pub base_dir: PathBuf,
}

impl Tenant {
    /// Resolve a tenant under the shared tenants root (`<root>/<id>`)
    pub fn new(tenants_root: &Path, id: &str) -> Result<Self, ContentError> {
        validate_segment("tenant", id)?;
        Ok(Self {
            id: id.to_string(),
            base_dir: tenants_root.join(id),
        })
    }
}

/// One (tenant, language, monument, mode) tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentUnit {
    pub tenant: String,
    pub language: String,
    pub monument: String,
    pub mode: String,
}

impl ContentUnit {
    pub fn new(tenant: &Tenant, language: &str, monument: &str, mode: &str) -> Self {
        Self {
            tenant: tenant.id.clone(),
            language: language.to_string(),
            monument: monument.to_string(),
            mode: mode.to_string(),
        }
    }
}

impl std::fmt::Display for ContentUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.tenant, self.language, self.monument, self.mode
        )
    }
}

/// Check that a user-supplied value can be used as a single directory or file stem.
///
/// Accepts ASCII letters, digits, `.`, `_` and `-`. The relative names `.` and `..`
/// are rejected so a value can never climb out of the tenant tree.
pub fn validate_segment(field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.is_empty() {
        return Err(ContentError::EmptySegment { field });
    }

    let allowed = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if !allowed || value == "." || value == ".." {
        return Err(ContentError::InvalidSegment {
            field,
            value: value.to_string(),
        });
    }

    Ok(())
}
