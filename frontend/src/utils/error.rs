use std::fmt::{self, Display};

use leptos::ServerFnError;
use serde::{Deserialize, Serialize};
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }
}

impl std::error::Error for Error {}
impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.kind, self.context)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// api error, carries the response status
    Http(u16),
    Malformed,

    /// runtime error
    Network,
    Browser,
    Internal,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Http(status) => write!(f, "HTTP error {status}"),
            ErrorKind::Malformed => write!(f, "Malformed response"),
            ErrorKind::Network => write!(f, "Network Error"),
            ErrorKind::Browser => write!(f, "Browser Error"),
            ErrorKind::Internal => write!(f, "Internal Error"),
        }
    }
}

impl From<gloo::net::Error> for Error {
    fn from(value: gloo::net::Error) -> Self {
        use gloo::net::Error as NetError;

        match value {
            NetError::SerdeError(err) => err.into(),
            NetError::JsError(err) => Self {
                kind: ErrorKind::Network,
                context: err.to_string(),
            },
            NetError::GlooError(err) => Self {
                kind: ErrorKind::Network,
                context: err,
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self {
            kind: ErrorKind::Malformed,
            context: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Self {
            kind: ErrorKind::Internal,
            context: value.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Internal,
            context: value.to_string(),
        }
    }
}

impl From<ServerFnError> for Error {
    fn from(value: ServerFnError) -> Self {
        Self {
            kind: ErrorKind::Network,
            context: value.to_string(),
        }
    }
}

pub trait Context {
    type Output;
    fn context(self, c: impl AsRef<str>) -> Self::Output;
}

impl<E> Context for E
where
    E: Into<Error>,
{
    type Output = Error;

    fn context(self, c: impl AsRef<str>) -> Self::Output {
        let mut err: Error = self.into();
        err.context.push_str("\n  >");
        err.context.push_str(c.as_ref());
        err
    }
}

impl<T, E> Context for Result<T, E>
where
    E: Into<Error>,
{
    type Output = Result<T>;

    fn context(self, c: impl AsRef<str>) -> Self::Output {
        self.map_err(|err| err.context(c))
    }
}
