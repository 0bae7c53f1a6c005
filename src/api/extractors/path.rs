//! Path extractor that reports parse failures as JSON errors.

use axum::extract::{rejection::PathRejection, FromRequestParts};

use crate::errors::AppError;

/// `axum::extract::Path` with `AppError` as its rejection.
///
/// `/users/abc` against a numeric id becomes a 400 `VALIDATION_ERROR`
/// body instead of axum's plain-text rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}
