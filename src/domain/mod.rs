mod joke_content;
mod joke_name;
mod joke_record;
mod new_joke;

pub use joke_content::JokeContent;
pub use joke_name::JokeName;
pub use joke_record::JokeRecord;
pub use new_joke::{FieldErrors, NewJoke};
