#[derive(Debug, Clone)]
pub struct JokeContent(String);

impl JokeContent {
    pub const MIN_LENGTH: usize = 10;
    pub const TOO_SHORT: &'static str = "Joke is too short!";

    pub fn parse(s: String) -> Result<Self, String> {
        if s.encode_utf16().count() < Self::MIN_LENGTH {
            Err(Self::TOO_SHORT.to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for JokeContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
