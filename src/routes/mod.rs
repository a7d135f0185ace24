mod health_check;
mod helpers;
mod jokes;

pub use health_check::*;
pub use helpers::*;
pub use jokes::*;
