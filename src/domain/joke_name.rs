#[derive(Debug, Clone)]
pub struct JokeName(String);

impl JokeName {
    pub const MIN_LENGTH: usize = 3;
    pub const TOO_SHORT: &'static str = "Name is too short!";

    /// Length is counted in UTF-16 code units, the way browsers measure
    /// form values.
    pub fn parse(s: String) -> Result<Self, String> {
        if s.encode_utf16().count() < Self::MIN_LENGTH {
            Err(Self::TOO_SHORT.to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for JokeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
