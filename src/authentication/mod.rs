mod middleware;

pub use middleware::{UserId, login_redirect, reject_anonymous_users};
