use std::ops::Deref;

use actix_web::{
    FromRequest, HttpMessage,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    error::InternalError,
    middleware::Next,
};
use uuid::Uuid;

use crate::{
    routes::{e500, see_other},
    session_state::TypedSession,
};

/// Identity of the logged-in user, attached to the request extensions by
/// [`reject_anonymous_users`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(user_id: Uuid) -> Self {
        Self(user_id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Deref for UserId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Where anonymous users are sent, remembering the page they asked for.
pub fn login_redirect(path: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("redirectTo", path)
        .finish();
    format!("/login?{query}")
}

/// Resolves the acting user from the session, or aborts the request with a
/// redirect to the login page before any handler runs.
pub async fn reject_anonymous_users(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let session = {
        let (http_request, payload) = req.parts_mut();
        TypedSession::from_request(http_request, payload).await
    }?;

    match session.get_user_id().map_err(e500)? {
        Some(user_id) => {
            req.extensions_mut().insert(UserId(user_id));
            next.call(req).await
        }
        None => {
            let response = see_other(&login_redirect(req.path()));
            let e = anyhow::anyhow!("The user has not logged in");
            tracing::info!(path = %req.path(), "Rejected an anonymous request");
            Err(InternalError::from_response(e, response).into())
        }
    }
}
