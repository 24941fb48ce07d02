use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::ValidationErrors;

/// Error body returned by every failing route.
///
/// `errors` is only present on validation failures, where it carries the
/// field → messages mapping.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl ErrorDto {
    pub fn message(message: String) -> Self {
        Self {
            message,
            errors: None,
        }
    }
}
