mod errors;
mod get;
mod post;
mod types;
mod view;

pub use errors::NewJokeError;
pub use get::new_joke_form;
pub use post::{create_joke, form_config, submit_joke};
pub use types::{SubmissionInput, SubmissionResult};
pub use view::{ERROR_BOUNDARY_MESSAGE, NewJokePage, error_boundary_page};
