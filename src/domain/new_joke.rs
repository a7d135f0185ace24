use super::{JokeContent, JokeName};

#[derive(Debug)]
pub struct NewJoke {
    pub name: JokeName,
    pub content: JokeContent,
}

/// Per-field validation messages. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.content.is_none()
    }
}

impl NewJoke {
    /// Both fields are always validated so every message can be shown at once.
    pub fn parse(name: String, content: String) -> Result<Self, FieldErrors> {
        let name = JokeName::parse(name);
        let content = JokeContent::parse(content);

        match (name, content) {
            (Ok(name), Ok(content)) => Ok(Self { name, content }),
            (name, content) => Err(FieldErrors {
                name: name.err(),
                content: content.err(),
            }),
        }
    }
}
