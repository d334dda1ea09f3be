use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Nothing stored under the session key.
    Missing,
    /// Something is stored, but it is not a session record.
    Malformed(String),
    /// The store itself could not be read or written.
    Unavailable(String),
}

impl SessionError {
    /// Whether the visitor should be sent back to the login page.
    pub fn redirects(&self) -> bool {
        matches!(self, Self::Missing | Self::Malformed(_))
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no session found"),
            Self::Malformed(reason) => write!(f, "malformed session: {reason}"),
            Self::Unavailable(reason) => write!(f, "session store unavailable: {reason}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}
