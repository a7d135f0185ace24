use actix_web::{HttpResponse, http::header::ContentType};

use super::NewJokePage;
use crate::routes::e500;

pub async fn new_joke_form() -> Result<HttpResponse, actix_web::Error> {
    let page = NewJokePage::from_result(None).render().map_err(e500)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page))
}
