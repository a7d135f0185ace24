mod joke;
mod new;

pub use joke::show_joke;
pub use new::*;
