//! Common types used across CLI modules

use uuid::Uuid;

/// Reference to a run: a full ID, or a run name / unambiguous ID prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunRef {
    /// Full run ID
    Full(String),
    /// Run name or ID prefix
    Partial(String),
}

impl RunRef {
    /// Parse a string into a RunRef
    ///
    /// Anything that parses as a UUID is taken as a full ID.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match Uuid::parse_str(input) {
            Ok(uuid) => RunRef::Full(uuid.hyphenated().to_string()),
            Err(_) => RunRef::Partial(input.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RunRef::Full(id) => id,
            RunRef::Partial(partial) => partial,
        }
    }
}

impl std::fmt::Display for RunRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for RunRef {
    fn from(s: &str) -> Self {
        RunRef::parse(s)
    }
}
