//! Path extractor whose rejection is an [`AppError`], so bad segments still get the envelope.

use crate::error::AppError;
use axum::extract::FromRequestParts;

#[derive(FromRequestParts, Debug)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
