//! API handlers organized by resource.
//!
//! Each submodule owns one slice of the surface. Shared conversions from
//! repository and path errors live here.

mod generate;
mod health;
mod jobs;
mod publish;
mod qc;
mod roadmap;

pub use generate::*;
pub use health::*;
pub use jobs::*;
pub use publish::*;
pub use qc::*;
pub use roadmap::*;

use axum::http::StatusCode;
use uuid::Uuid;

use crate::application::repos::RepoError;

use super::error::{ApiError, codes};

/// Job ids arrive as raw path segments; anything that is not a UUID is a 400,
/// a well-formed id with no record behind it is a 404 at the call site.
pub(crate) fn parse_job_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|err| {
        ApiError::bad_request("invalid job id", Some(format!("`{raw}`: {err}")))
    })
}

pub(crate) fn repo_to_api(err: RepoError) -> ApiError {
    match err {
        RepoError::Duplicate { constraint } => ApiError::new(
            StatusCode::CONFLICT,
            codes::DUPLICATE,
            "Duplicate record",
            Some(constraint),
        ),
        RepoError::NotFound => ApiError::not_found("resource not found"),
        RepoError::Persistence(message) => ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::REPO,
            "Persistence error",
            Some(message),
        ),
    }
}
