use std::io;
use std::sync::Arc;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("io error: {0}")]
    IO(Arc<io::Error>),
    #[error("catalog corrupt: {0}")]
    Corrupt(String),
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::IO(Arc::new(value))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
