use actix_web::{
    HttpRequest, HttpResponse, ResponseError, error::InternalError, http::header::ContentType, web,
};
use anyhow::Context;

use super::{NewJokeError, NewJokePage, SubmissionInput, SubmissionResult};
use crate::{
    authentication::UserId,
    domain::NewJoke,
    routes::{accepts_html, see_other},
    store::JokeStore,
};

#[tracing::instrument(
    name = "Create joke",
    skip(request, form, store, user_id),
    fields(user_id = %&*user_id)
)]
pub async fn create_joke<S: JokeStore + 'static>(
    request: HttpRequest,
    form: web::Form<SubmissionInput>,
    store: web::Data<S>,
    user_id: web::ReqData<UserId>,
) -> Result<HttpResponse, NewJokeError> {
    let outcome = submit_joke(store.get_ref(), user_id.into_inner(), form.0).await?;
    respond(&request, &outcome)
}

/// Validates a well-formed submission and, when both fields pass, stores it
/// on behalf of `jokester_id`. The store is never called for invalid input.
#[tracing::instrument(name = "Submit joke", skip(store, input))]
pub async fn submit_joke<S: JokeStore>(
    store: &S,
    jokester_id: UserId,
    input: SubmissionInput,
) -> Result<SubmissionResult, anyhow::Error> {
    let new_joke = match NewJoke::parse(input.name.clone(), input.content.clone()) {
        Ok(joke) => joke,
        Err(field_errors) => {
            tracing::info!(?field_errors, "The joke failed validation");
            return Ok(SubmissionResult::ValidationFailure {
                field_errors,
                fields: input,
            });
        }
    };

    let record_id = store.insert_joke(&new_joke, jokester_id).await?;
    tracing::info!(%record_id, "Stored a new joke");

    Ok(SubmissionResult::Created { record_id })
}

fn respond(request: &HttpRequest, outcome: &SubmissionResult) -> Result<HttpResponse, NewJokeError> {
    match outcome {
        SubmissionResult::Created { record_id } => Ok(see_other(&format!("/jokes/{record_id}"))),
        failure if accepts_html(request) => {
            let page = NewJokePage::from_result(Some(failure))
                .render()
                .context("Failed to render the new joke form.")?;
            Ok(HttpResponse::BadRequest()
                .content_type(ContentType::html())
                .body(page))
        }
        failure => Ok(HttpResponse::BadRequest().json(failure)),
    }
}

/// Turns any failure to read the form into a `FormError` response.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, req| {
        let response = respond(req, &SubmissionResult::malformed())
            .unwrap_or_else(|e| e.error_response());
        let e = NewJokeError::MalformedSubmission(anyhow::anyhow!("{err}"));
        InternalError::from_response(e, response).into()
    })
}
