use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::AppError;
use crate::shared::constants::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

/// Envelope used for error bodies.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            errors,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Offset pagination for the list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Number of records to skip (default: 0)
    #[serde(default)]
    #[param(minimum = 0)]
    pub skip: i64,

    /// Maximum number of records to return (default: 100, max: 1000)
    #[serde(default = "default_limit")]
    #[param(minimum = 0, maximum = 1000)]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIST_LIMIT
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ListQuery {
    /// SQL OFFSET; negative values are treated as zero
    pub fn offset(&self) -> i64 {
        self.skip.max(0)
    }

    /// SQL LIMIT clamped to `0..=MAX_LIST_LIMIT`
    pub fn limit(&self) -> i64 {
        self.limit.clamp(0, MAX_LIST_LIMIT)
    }
}

// =============================================================================
// PARTIAL UPDATES
// =============================================================================

/// A field of a partial-update payload.
///
/// Distinguishes a field that was left out of the JSON body from one that
/// was sent as an explicit `null`. Use with `#[serde(default)]` so absent
/// keys become [`Patch::Missing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Missing,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}

impl<T> Patch<T> {
    /// Resolves the patch for a non-nullable column.
    ///
    /// `Missing` means "leave unchanged" and yields `None`; an explicit
    /// `null` is rejected because the column cannot hold it.
    pub fn into_required(self, field: &str) -> Result<Option<T>, AppError> {
        match self {
            Patch::Missing => Ok(None),
            Patch::Null => Err(AppError::Validation(format!("{} cannot be null", field))),
            Patch::Value(value) => Ok(Some(value)),
        }
    }
}
