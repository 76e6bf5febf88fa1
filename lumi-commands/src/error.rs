use std::{error, fmt};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    IoPath(String, std::io::Error),
    Ron(ron::error::SpannedError),
    Json(serde_json::Error),
    ParseMode(String),
    UnknownMode(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoPath(path, io) => write!(f, "IO Error: {path}, {io}"),
            Error::Ron(e) => write!(f, "RON Parse Error: {e}"),
            Error::Json(e) => write!(f, "JSON Parse Error: {e}"),
            Error::ParseMode(s) => write!(f, "Could not parse mode command {s}"),
            Error::UnknownMode(b) => write!(f, "0x{b:02X} is not a mode command"),
        }
    }
}

impl error::Error for Error {}

impl From<ron::error::SpannedError> for Error {
    fn from(e: ron::error::SpannedError) -> Self {
        Self::Ron(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
