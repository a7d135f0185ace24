use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header::ContentType},
};

use super::{SubmissionResult, error_boundary_page};
use crate::routes::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum NewJokeError {
    #[error("{}", SubmissionResult::MALFORMED_MESSAGE)]
    MalformedSubmission(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for NewJokeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for NewJokeError {
    fn status_code(&self) -> StatusCode {
        match self {
            NewJokeError::MalformedSubmission(_) => StatusCode::BAD_REQUEST,
            NewJokeError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // `form_config` replaces this with the content-negotiated response;
            // this JSON body is only the fallback when the error is returned directly.
            NewJokeError::MalformedSubmission(_) => {
                HttpResponse::BadRequest().json(SubmissionResult::malformed())
            }
            // the cause chain is logged by the tracing middleware, never sent
            NewJokeError::UnexpectedError(_) => HttpResponse::InternalServerError()
                .content_type(ContentType::html())
                .body(error_boundary_page()),
        }
    }
}
