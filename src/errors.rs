use std::error::Error as StdError;
use std::fmt;
use std::num::ParseFloatError;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the edges of wanderstate: loading maps, file IO,
/// command line validation and server requests.
///
/// Path parsing and scaling never produce an `Error`; malformed path data
/// degrades to partial geometry instead.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Parse(String),
    InvalidData(String),
    Cli(String),
    Document(String),
    Other(Box<dyn StdError + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(source) => write!(f, "IO error: {source}"),
            Error::Parse(reason) => write!(f, "parse error: {reason}"),
            Error::InvalidData(reason) => write!(f, "invalid data: {reason}"),
            Error::Cli(reason) => write!(f, "{reason}"),
            Error::Document(reason) => write!(f, "document error: {reason}"),
            Error::Other(source) => write!(f, "{source}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Other(source) => Some(&**source),
            Error::Parse(_) | Error::InvalidData(_) | Error::Cli(_) | Error::Document(_) => None,
        }
    }
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: StdError + Send + Sync + 'static,
    {
        Error::Other(Box::new(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::Parse(format!("float: {err}"))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Document(format!("JSON: {err}"))
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Error {
        Error::InvalidData(err.to_string())
    }
}
