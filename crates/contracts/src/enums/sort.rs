use serde::{Deserialize, Serialize};

/// Allow-listed sort columns for the order list.
///
/// Untrusted `sort_by` input must pass through `from_param` before it gets
/// anywhere near a query; anything outside the list collapses to the
/// default rather than erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    CreatedAt,
    Quantity,
    Status,
}

impl SortField {
    pub fn code(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::Quantity => "quantity",
            SortField::Status => "status",
        }
    }

    /// Normalize a raw query parameter. Absent or unrecognized values fall
    /// back to `created_at`.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("created_at") => SortField::CreatedAt,
            Some("quantity") => SortField::Quantity,
            Some("status") => SortField::Status,
            _ => SortField::default(),
        }
    }
}

/// Sort direction, default descending (newest first under `created_at`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn code(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Normalize a raw query parameter. Absent or unrecognized values fall
    /// back to `desc`.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::default(),
        }
    }
}
