use serde::Serialize;

pub const UNEXPECTED_ERROR: &str = "unexpected error occurred";

/// Progress of a single fetch attempt.
///
/// `Loading` always comes first; `Success` and `Error` are terminal and never
/// both produced for the same attempt.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome<T> {
    Loading,
    Success { data: T },
    Error { message: String },
}

impl<T> Outcome<T> {
    pub fn success(data: T) -> Self {
        Outcome::Success { data }
    }

    /// Builds an `Error` from a failure's text, substituting the generic
    /// message when there is no text.
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Outcome::Error {
                message: UNEXPECTED_ERROR.to_string(),
            }
        } else {
            Outcome::Error { message }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Outcome::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success { data } => Some(data),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }
}
