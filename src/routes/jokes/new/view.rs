use super::SubmissionResult;
use crate::routes::prepare_html_template;

pub const ERROR_BOUNDARY_MESSAGE: &str = "Something unexpected went wrong. Sorry about that.";

/// Everything the new joke form displays. Built from the outcome of the last
/// submission, if any, without touching the template engine.
#[derive(Debug, Default, PartialEq)]
pub struct NewJokePage {
    pub name: String,
    pub content: String,
    pub name_error: Option<String>,
    pub content_error: Option<String>,
    pub form_error: Option<String>,
}

impl NewJokePage {
    pub fn from_result(result: Option<&SubmissionResult>) -> Self {
        match result {
            Some(SubmissionResult::FormError { message }) => Self {
                form_error: Some(message.clone()),
                ..Self::default()
            },
            Some(SubmissionResult::ValidationFailure {
                field_errors,
                fields,
            }) => Self {
                name: fields.name.clone(),
                content: fields.content.clone(),
                name_error: field_errors.name.clone(),
                content_error: field_errors.content.clone(),
                form_error: None,
            },
            Some(SubmissionResult::Created { .. }) | None => Self::default(),
        }
    }

    pub fn render(&self) -> Result<String, tera::Error> {
        prepare_html_template(
            &[
                ("name", self.name.as_str()),
                ("content", self.content.as_str()),
                ("name_error", self.name_error.as_deref().unwrap_or_default()),
                (
                    "content_error",
                    self.content_error.as_deref().unwrap_or_default(),
                ),
                ("form_error", self.form_error.as_deref().unwrap_or_default()),
            ],
            "jokes/new.html",
        )
    }
}

/// Static fallback for failures the form cannot explain to the user.
pub fn error_boundary_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta http-equiv="content-type" content="text/html; charset=utf-8"><title>Jokes</title></head>
<body><div class="error-container">{ERROR_BOUNDARY_MESSAGE}</div></body>
</html>"#
    )
}
