use actix_web::{HttpResponse, http::header::ContentType, web};
use uuid::Uuid;

use crate::{
    routes::{e500, prepare_html_template},
    store::JokeStore,
};

/// Page the submission flow redirects to after a joke is stored.
#[tracing::instrument(name = "Show joke", skip(store))]
pub async fn show_joke<S: JokeStore + 'static>(
    joke_id: web::Path<Uuid>,
    store: web::Data<S>,
) -> Result<HttpResponse, actix_web::Error> {
    let Some(joke) = store
        .find_joke(joke_id.into_inner())
        .await
        .map_err(e500)?
    else {
        return Ok(HttpResponse::NotFound().finish());
    };

    let page = prepare_html_template(
        &[("name", joke.name.as_str()), ("content", joke.content.as_str())],
        "jokes/joke.html",
    )
    .map_err(e500)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page))
}
